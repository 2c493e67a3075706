//! Draw layers (z order of the 2D scene).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Background,
    Meteor,
    Laser,
    Player,
    Effect,
    Hud,
}

impl Layer {
    #[inline]
    pub fn z(self) -> f32 {
        match self {
            Layer::Background => 0.0,
            Layer::Meteor => 1.0,
            Layer::Laser => 2.0,
            Layer::Player => 3.0,
            Layer::Effect => 4.0,
            Layer::Hud => 10.0,
        }
    }
}
