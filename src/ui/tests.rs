use bevy::prelude::*;

use super::banner::{LevelEndBanner, announce_level_end};
use super::{HeartState, end_banner_text, heart_state, summary_lines};
use crate::progression::{LevelEndReason, LevelFinalizedEvent, LevelSummary};

#[test]
fn test_hearts_match_health() {
    let states: Vec<_> = (0..5).map(|i| heart_state(i, 2, 3)).collect();
    assert_eq!(
        states,
        [
            HeartState::Full,
            HeartState::Full,
            HeartState::Empty,
            HeartState::Hidden,
            HeartState::Hidden,
        ]
    );

    assert_eq!(heart_state(0, 0, 3), HeartState::Empty);
}

#[test]
fn test_summary_lines_format() {
    let lines = summary_lines(&LevelSummary {
        level: 2,
        run_percent: 66.666_67,
        best_percent: 100.0,
    });

    assert_eq!(lines[0], "Level 2 Complete!");
    assert_eq!(lines[1], "This run: 66.7%");
    assert_eq!(lines[2], "Your best: 100.0%");
}

#[test]
fn test_end_banner_names_the_reason() {
    assert_eq!(
        end_banner_text(LevelEndReason::AllEnemiesKilled),
        "LEVEL CLEARED"
    );
    assert_eq!(end_banner_text(LevelEndReason::PlayerDied), "DEFEATED");
}

#[test]
fn test_level_end_spawns_a_single_banner() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_message::<LevelFinalizedEvent>()
        .add_systems(Update, announce_level_end);

    app.update();
    let mut banners = app
        .world_mut()
        .query_filtered::<(), With<LevelEndBanner>>();
    assert_eq!(banners.iter(app.world()).count(), 0);

    let finalized = LevelFinalizedEvent {
        summary: LevelSummary {
            level: 1,
            run_percent: 50.0,
            best_percent: 50.0,
        },
        reason: LevelEndReason::PlayerDied,
    };
    app.world_mut().write_message(finalized);
    app.update();
    app.world_mut().write_message(finalized);
    app.update();

    assert_eq!(banners.iter(app.world()).count(), 1);
}
