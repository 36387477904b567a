use crate::Route;

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
