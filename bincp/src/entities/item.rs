/// Rectangular item to be packed. Items cannot be rotated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: usize,
    pub width: u64,
    pub height: u64,
}

impl Item {
    pub fn new(id: usize, width: u64, height: u64) -> Self {
        assert!(width > 0 && height > 0, "item dimensions must be positive");
        Self { id, width, height }
    }

    pub fn area(&self) -> u64 {
        self.width * self.height
    }

    /// `[width, height]`
    pub fn dims(&self) -> [u64; 2] {
        [self.width, self.height]
    }
}
