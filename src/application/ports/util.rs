// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
    /// Six lower-case hex characters appended to a colliding slug.
    fn collision_suffix(&self) -> String;
}
