// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests import modules from this crate root to reach the code under test.

pub mod core {
    pub mod entity;
    pub mod item;
    pub mod ports;
}

pub mod adapters {
    pub mod in_memory {
        pub mod id_generator;
        pub mod in_memory_repository;
    }
}

pub mod shell {
    pub mod config;
    pub mod telemetry;
}
