//! Auth adapters. Implement AuthGatewayProvider / SessionGateway.
//!
//! Supabase for production and a static provider for tests.

pub mod static_provider;
pub mod supabase;

pub use static_provider::StaticAuthProvider;
pub use supabase::SupabaseAuthProvider;
