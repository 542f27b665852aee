use acss::AcssError;

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, AcssError>;
