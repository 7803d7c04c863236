// file: src/mcp/mod.rs
// description: MCP (Model Context Protocol) transports and tool dispatch
// reference: https://docs.rs/rmcp

pub mod dispatcher;
pub mod http;
pub mod server;

pub use dispatcher::{ToolDescriptor, ToolDispatcher, descriptors};
pub use server::BlogMcpServer;
