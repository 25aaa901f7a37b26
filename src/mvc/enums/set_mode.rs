#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetMode {
    Replicate,
    Observe,
    Silent,
}
