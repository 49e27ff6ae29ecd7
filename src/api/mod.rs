//! Document submission API: wire models, transport and client.

mod client;
mod document;
mod transport;

pub use client::CrptClient;
pub use document::{
    CreateDocumentRequest, CreateDocumentResponse, Description, Document, ErrorResponse, Product,
};
pub use transport::{HttpTransport, RawResponse, Transport};
