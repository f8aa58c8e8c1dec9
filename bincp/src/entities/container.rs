/// Shape shared by every bin of a [`BP2Instance`](crate::entities::BP2Instance).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Container {
    pub width: u64,
    pub height: u64,
}

impl Container {
    pub fn new(width: u64, height: u64) -> Self {
        assert!(width > 0 && height > 0, "container dimensions must be positive");
        Self { width, height }
    }

    pub fn area(&self) -> u64 {
        self.width * self.height
    }

    pub fn dims(&self) -> [u64; 2] {
        [self.width, self.height]
    }
}
