/// Decorative animal walkers that cross the bottom of the card while the
/// egg cooks.
///
/// Each walker keeps a raw accumulator that advances by its own step and
/// wraps on its own window, so the three drift at different speeds and in
/// different directions. Positions are percentages of the card width and
/// may start offscreen (negative or above 100) on purpose.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Parade {
    chick: f32,
    bunny: f32,
    hen: f32,
}

const CHICK_WINDOW: f32 = 120.0;
const BUNNY_WINDOW: f32 = 120.0;
const HEN_WINDOW: f32 = 140.0;

impl Parade {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every walker by one tick worth of travel.
    pub fn advance(&mut self) {
        self.chick = (self.chick + 1.0) % CHICK_WINDOW;
        self.bunny = (self.bunny + 0.5) % BUNNY_WINDOW;
        self.hen = (self.hen + 0.3) % HEN_WINDOW;
    }

    /// Chick walks left-to-right across `-10..110`.
    #[must_use]
    pub fn chick_percent(&self) -> f32 {
        self.chick - 10.0
    }

    /// Bunny hops right-to-left across `110..-10`.
    #[must_use]
    pub fn bunny_percent(&self) -> f32 {
        110.0 - self.bunny
    }

    /// Hen strolls left-to-right across `-20..120`, slowest of the three.
    #[must_use]
    pub fn hen_percent(&self) -> f32 {
        self.hen - 20.0
    }
}
