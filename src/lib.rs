//! Cyber Tip API — cybersecurity tips generated by an LLM and returned as
//! structured JSON.

pub mod llm;
pub mod routes;
pub mod services;
pub mod state;
pub mod tip;
