// Library crate: exposes the headless, testable core (session state, solid
// building, picking) for integration tests. GUI-specific modules (app, ui,
// viewport rendering) remain in the binary crate.

pub mod build;
pub mod harness;
pub mod state;

/// Subset of viewport types needed by build/state (MeshData, Ray, picking).
/// The full viewport (camera, GL renderer) stays in the binary crate.
pub mod viewport {
    pub mod mesh;
    pub mod picking;
}
