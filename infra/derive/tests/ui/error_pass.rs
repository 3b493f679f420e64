use std::borrow::Cow;

#[waypoint_derive::waypoint_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid input: {reason}")]
    Invalid { reason: String },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: DemoError = "boom".into();
    assert!(matches!(err, DemoError::Internal { .. }));
}
