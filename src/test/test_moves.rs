mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    const SCENARIO: &str = r#"
4000B0
120000
050000
678900
ABCD30
"#;

    #[test]
    fn scenario_plays_through_to_the_exit() {
        let mut game = GameTestState::new(SCENARIO);

        game.assert_rejected(Left, MoveRejection::OutOfBounds);
        game.assert_rejected(Down, MoveRejection::Wall);
        assert_eq!(game.game_state.moves.len(), 0);

        game.assert_move(Right);
        assert_eq!(game.game_state.moves.len(), 1);
        assert_eq!(game.game_state.pos.x, 1);

        let change = game.assert_move(Down);
        assert_eq!(change, GameChangeType::BlockConsumed);
        assert_eq!(game.game_state.moves.len(), 2);
        let consumed = game.game_state.block(1).unwrap();
        assert!(consumed.consumed);
        assert_eq!(consumed.pos, Vec2 { x: 1, y: 2 });

        game.assert_moves(&[Right, Right, Up, Right]);
        assert_eq!(game.game_state.moves.len(), 6);

        // the up/right block is now against the right edge
        game.assert_rejected(Right, MoveRejection::BlockBlocked);

        game.assert_moves(&[Down, Down, Down, Down]);
        assert_eq!(game.game_state.moves.len(), 10);
        assert!(game.game_state.is_player_on_exit());

        game.assert_rejected(Right, MoveRejection::LevelComplete);
        assert_eq!(game.game_state.moves.len(), 10);

        game.assert_matches(r#"
00000B
100000
000000
678900
ABCD40
"#);
        assert_eq!(game.game_state.move_count, 10);
        assert_eq!(game.game_state.action_count, 10);
    }

    #[test]
    fn when_move_right_observes_move_right() {
        let mut game = GameTestState::new(r#"
1401
"#);
        let change = game.assert_move(Right);

        assert_eq!(change, GameChangeType::PlayerMove);
        game.assert_matches(r#"
1041
"#);
    }

    #[test]
    fn when_push_pushes() {
        let mut game = GameTestState::new(r#"
14201
"#);
        let change = game.assert_move(Right);

        assert_eq!(change, GameChangeType::PlayerAndBlockMove);
        game.assert_matches(r#"
10421
"#);
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks() {
        let mut game = GameTestState::new(r#"
142201
"#);
        game.assert_rejected(Right, MoveRejection::BlockBlocked);

        game.assert_matches(r#"
142201
"#);
    }

    #[test]
    fn block_cannot_be_pushed_into_wall() {
        let mut game = GameTestState::new(r#"
1421
"#);
        game.assert_rejected(Right, MoveRejection::BlockBlocked);
    }

    #[test]
    fn none_is_never_a_move() {
        let mut game = GameTestState::new(r#"
400
"#);
        game.assert_rejected(None, MoveRejection::NoDirection);
    }

    #[test]
    fn player_cannot_step_into_open_hole() {
        let mut game = GameTestState::new(r#"
450
"#);
        game.assert_rejected(Right, MoveRejection::Hole);
    }

    #[test]
    fn directional_block_only_moves_its_way() {
        let mut game = GameTestState::new(r#"
4600
"#);
        game.assert_rejected(Right, MoveRejection::BlockLocked);

        let mut game = GameTestState::new(r#"
0640
"#);
        game.assert_move(Left);
        game.assert_matches(r#"
6400
"#);
        game.assert_rejected(Left, MoveRejection::BlockBlocked);
    }

    #[test]
    fn two_way_block_rejects_the_other_axis() {
        let mut game = GameTestState::new(r#"
000
0J0
040
"#);
        game.assert_move(Up);
        game.assert_matches(r#"
0J0
040
000
"#);

        let mut game = GameTestState::new(r#"
000
4J0
000
"#);
        game.assert_rejected(Right, MoveRejection::BlockLocked);
    }

    #[test]
    fn one_way_tile_is_entered_and_left_along_its_arrow() {
        let mut game = GameTestState::new(r#"
000
4>0
"#);
        game.assert_move(Right);
        game.assert_rejected(Up, MoveRejection::TileLocked);
        game.assert_rejected(Left, MoveRejection::TileLocked);
        game.assert_move(Right);

        let mut game = GameTestState::new(r#"
4<0
"#);
        game.assert_rejected(Right, MoveRejection::TileLocked);
    }

    #[test]
    fn one_way_tile_also_steers_blocks() {
        let mut game = GameTestState::new(r#"
42>0
"#);
        game.assert_move(Right);
        game.assert_move(Right);
        game.assert_matches(r#"
0042
"#);

        let mut game = GameTestState::new(r#"
0
v
2
4
"#);
        game.assert_rejected(Up, MoveRejection::BlockBlocked);
    }

    #[test]
    fn filled_hole_becomes_ground() {
        let mut game = GameTestState::new(r#"
425200
"#);
        game.assert_move(Right);
        game.assert_matches(r#"
040200
"#);
        game.assert_move(Right);
        game.assert_move(Right);
        game.assert_matches(r#"
000420
"#);
    }

    #[test]
    fn persistent_hole_keeps_swallowing() {
        let level = r#"
42500
00200
00000
"#;
        let rules = MoveRules {
            hole_rule: HoleRule::Persistent,
            ..MoveRules::default()
        };
        let mut game = GameTestState::with_rules(level, rules);
        game.assert_move(Right);
        game.assert_rejected(Right, MoveRejection::Hole);

        game.assert_moves(&[Down, Down, Right]);
        let change = game.assert_move(Up);
        assert_eq!(change, GameChangeType::BlockConsumed);
        assert!(game.game_state.blocks.iter().all(|b| b.consumed));
        game.assert_matches(r#"
00500
00400
00000
"#);
    }

    #[test]
    fn fill_to_ground_lets_second_block_rest_on_filled_hole() {
        let mut game = GameTestState::new(r#"
42500
00200
00000
"#);
        game.assert_move(Right);
        game.assert_moves(&[Down, Down, Right]);
        let change = game.assert_move(Up);

        assert_eq!(change, GameChangeType::PlayerAndBlockMove);
        let second = game.game_state.block(1).unwrap();
        assert!(!second.consumed);
        assert_eq!(second.pos, Vec2 { x: 2, y: 0 });
    }

    #[test]
    fn undo_restores_consumed_block() {
        let mut game = GameTestState::new(SCENARIO);
        game.assert_move(Right);
        let before_push = game.game_state.clone();
        game.assert_move(Down);
        game.undo();

        assert_eq!(game.game_state, before_push);
        assert!(!game.game_state.block(1).unwrap().consumed);
    }

    #[test]
    fn undo_on_initial_state_is_a_no_op() {
        let game = GameTestState::new(SCENARIO);
        assert_eq!(undo(&game.game_state), game.game_state);
        assert_eq!(restart(&game.level), game.game_state);
    }

    #[test]
    fn restart_returns_to_initial_state() {
        let mut game = GameTestState::new(SCENARIO);
        game.assert_moves(&[Right, Down, Right, Right, Up, Right, Down]);

        let restarted = restart(&game.level);
        assert_eq!(restarted, game.level.initial_state());
        assert!(restarted.moves.is_empty());
        assert!(restarted.blocks.iter().all(|b| !b.consumed));
    }

    #[test]
    fn moves_never_mutate_the_input() {
        let game = GameTestState::new(SCENARIO);
        let original = game.game_state.clone();

        let applied = apply_move(&game.game_state, Right, &game.rules);
        let rejected = apply_move(&game.game_state, Left, &game.rules);

        assert!(applied.applied);
        assert!(!rejected.applied);
        assert_eq!(rejected.state, original);
        assert_eq!(game.game_state, original);
        assert!(std::sync::Arc::ptr_eq(&applied.state.board, &original.board));
    }

    #[test]
    fn when_player_moves_back_positions_are_equal() {
        let mut game = GameTestState::new(r#"
4020
"#);
        let original = game.game_state.clone();
        game.assert_moves(&[Right, Left]);

        assert_eq!(game.game_state.pos, original.pos);
        assert_eq!(game.game_state.blocks, original.blocks);
        assert_ne!(game.game_state, original);
    }

    #[test]
    fn skipping_backtracks_keeps_counters_apart() {
        let rules = MoveRules {
            action_counting: ActionCounting::SkipBacktracks,
            ..MoveRules::default()
        };
        let mut game = GameTestState::with_rules(r#"
40020
"#, rules);
        game.assert_moves(&[Right, Left]);
        assert_eq!(game.game_state.move_count, 2);
        assert_eq!(game.game_state.action_count, 1);

        game.undo();
        assert_eq!(game.game_state.move_count, 1);
        assert_eq!(game.game_state.action_count, 1);

        // stepping back off a push still counts
        game.assert_moves(&[Right, Right, Left]);
        assert_eq!(game.game_state.move_count, 4);
        assert_eq!(game.game_state.action_count, 4);
    }

    #[test]
    fn move_records_describe_the_transition() {
        let mut game = GameTestState::new(r#"
4205
"#);
        game.assert_move(Right);
        game.assert_move(Right);

        let last = game.game_state.moves.last().copied().unwrap();
        assert_eq!(last, Move {
            direction: Right,
            player_from: Vec2 { x: 1, y: 0 },
            player_to: Vec2 { x: 2, y: 0 },
            block: Some(BlockPush {
                id: 0,
                from: Vec2 { x: 2, y: 0 },
                to: Vec2 { x: 3, y: 0 },
                consumed: true,
            }),
            counts_as_action: true,
        });
    }
}
