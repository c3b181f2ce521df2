//! Shared session constructor for all platforms.
//!
//! Returns an [`api::Session`] backed by the appropriate [`store::SessionStorage`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Native**: process memory via [`store::MemoryStorage`]; nothing survives a restart

/// Create the platform-appropriate session.
///
/// Called once by [`crate::SessionProvider`]; everything else receives the
/// session through the API client in the context.
pub fn make_session() -> api::Session {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        api::Session::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        api::Session::new(store::MemoryStorage::new())
    }
}
