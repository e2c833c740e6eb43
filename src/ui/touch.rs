//! UI domain: on-screen movement, jump, and attack buttons.

use bevy::prelude::*;

use crate::level::LevelEntity;
use crate::player::TouchControl;

const BUTTON_SIZE: f32 = 72.0;
const EDGE_PADDING: f32 = 24.0;
const BUTTON_IDLE: Color = Color::srgba(0.2, 0.2, 0.25, 0.6);
const BUTTON_HELD: Color = Color::srgba(0.45, 0.45, 0.55, 0.8);

fn label(control: TouchControl) -> &'static str {
    match control {
        TouchControl::Left => "<",
        TouchControl::Right => ">",
        TouchControl::Jump => "JUMP",
        TouchControl::Attack => "ATK",
    }
}

pub(crate) fn spawn_touch_controls(mut commands: Commands) {
    // Movement pad, bottom-left
    spawn_cluster(
        &mut commands,
        Node {
            left: Val::Px(EDGE_PADDING),
            ..cluster_node()
        },
        [TouchControl::Left, TouchControl::Right],
    );

    // Actions, bottom-right
    spawn_cluster(
        &mut commands,
        Node {
            right: Val::Px(EDGE_PADDING),
            ..cluster_node()
        },
        [TouchControl::Attack, TouchControl::Jump],
    );
}

fn cluster_node() -> Node {
    Node {
        position_type: PositionType::Absolute,
        bottom: Val::Px(EDGE_PADDING),
        column_gap: Val::Px(12.0),
        ..default()
    }
}

fn spawn_cluster(commands: &mut Commands, node: Node, controls: [TouchControl; 2]) {
    commands.spawn((LevelEntity, node)).with_children(|parent| {
        for control in controls {
            parent
                .spawn((
                    control,
                    Button,
                    Node {
                        width: Val::Px(BUTTON_SIZE),
                        height: Val::Px(BUTTON_SIZE),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(BUTTON_IDLE),
                    BorderColor::all(Color::srgba(0.6, 0.6, 0.7, 0.6)),
                ))
                .with_child((
                    Text::new(label(control)),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));
        }
    });
}

pub(crate) fn highlight_touch_controls(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (With<TouchControl>, Changed<Interaction>),
    >,
) {
    for (interaction, mut color) in &mut buttons {
        color.0 = match interaction {
            Interaction::Pressed => BUTTON_HELD,
            _ => BUTTON_IDLE,
        };
    }
}
