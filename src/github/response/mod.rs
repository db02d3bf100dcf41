mod release_response;

pub use release_response::ErrorResponse;
pub use release_response::ReleaseResponse;
