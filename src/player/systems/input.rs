//! Player domain: keyboard and on-screen button sampling.

use bevy::prelude::*;

use crate::player::{MovementInput, TouchControl};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    buttons: Query<(&Interaction, &TouchControl)>,
    pressed_buttons: Query<(&Interaction, &TouchControl), Changed<Interaction>>,
    mut input: ResMut<MovementInput>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    input.axis = x;

    // Holding left wins over holding right
    let held = |control: TouchControl| {
        buttons
            .iter()
            .any(|(interaction, c)| *c == control && *interaction == Interaction::Pressed)
    };
    input.held_override = if held(TouchControl::Left) {
        Some(-1.0)
    } else if held(TouchControl::Right) {
        Some(1.0)
    } else {
        None
    };

    let tapped = |control: TouchControl| {
        pressed_buttons
            .iter()
            .any(|(interaction, c)| *c == control && *interaction == Interaction::Pressed)
    };
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space) || tapped(TouchControl::Jump);
    input.attack_just_pressed = keyboard.just_pressed(KeyCode::KeyJ)
        || keyboard.just_pressed(KeyCode::KeyZ)
        || tapped(TouchControl::Attack);
}
