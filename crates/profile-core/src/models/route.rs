/// Navigation targets the view-model can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Unauthenticated entry point
    Login,
}
