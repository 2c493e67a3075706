use bevy::prelude::*;

fn main() -> AppExit {
    space_shooter::game::run()
}
