// Composition root for the banners service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory store and the filesystem image sink.
// - Wire them into the use case handlers and the HTTP router.

pub mod config;
pub mod http;
pub mod state;
