//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations. Every
//! multi-step write runs inside `data::transaction::run_in_transaction`, which commits on
//! success and rolls back on any error.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, input validation and DTO
//!   conversion
//! - **Service Layer** (`service/`) - Business logic and transaction boundaries
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guard for protected endpoints
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token issuer, config)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Token** (`token`) - Session token issuance and verification
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** validates input, checks the session through `AuthGuard` where required
//! 3. **Service** opens a transaction and executes business logic
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts the outcome to a DTO with its result code

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod token;
pub mod util;
