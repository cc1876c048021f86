mod classifier;

pub use classifier::IClassifier;
