// src/store/mod.rs
//
// Entity store: durable CRUD primitives over the Postgres pool. Mutations
// either commit whole or leave nothing behind; the services above decide
// what may be written.

pub mod replies;
pub mod threads;
pub mod users;
