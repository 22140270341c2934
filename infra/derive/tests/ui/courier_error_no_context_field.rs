use courier_derive::courier_error;

#[courier_error]
pub enum PlainError {
    #[error("Unknown kind: {kind}")]
    Unknown { kind: String },

    #[error("Empty input")]
    Empty {},
}

fn main() {
    let err = PlainError::Unknown { kind: "x".to_owned() };
    assert_eq!(err.kind(), "Unknown");
    assert_eq!(PlainError::Empty {}.to_string(), "Empty input");
}
