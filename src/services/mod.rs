pub mod api_client;
pub mod errors;
pub mod headers;
pub mod token;
pub mod transport;

pub use api_client::{ApiClient, Endpoint, SolutionFilter, UserFilter};
pub use errors::{resolve_error, ErrorOrigin};
pub use headers::{build_headers, Headers};
pub use token::{resolve_token, TokenError};
pub use transport::{GlooTransport, HttpRequest, HttpResponse, Method, Transport, TransportError};
