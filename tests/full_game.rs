use neopixel_connect_four::ai::{Agent, HeuristicAgent, RandomAgent};
use neopixel_connect_four::colour::{neopixel_colour_from_raw, PlayerColour};
use neopixel_connect_four::display::{LedLayout, NeopixelFrame, LED_COUNT};
use neopixel_connect_four::game::{GameOutcome, GameState, Player};
use neopixel_connect_four::player_colour_to_neopixel_colour;
use neopixel_connect_four::ui::ConsoleGame;

fn play_out(red: &mut dyn Agent, yellow: &mut dyn Agent) -> GameState {
    let mut state = GameState::initial();
    while !state.is_terminal() {
        let agent: &mut dyn Agent = match state.current_player() {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };
        let col = agent.select_action(&state).expect("legal move while not terminal");
        state.apply_move_mut(col).unwrap();
    }
    state
}

#[test]
fn frame_matches_board_after_full_game() {
    for seed in 0..10 {
        let state = play_out(
            &mut HeuristicAgent::with_seed(seed),
            &mut RandomAgent::with_seed(seed + 100),
        );

        for layout in [LedLayout::RowMajor, LedLayout::Serpentine] {
            let frame = NeopixelFrame::from_board(state.board(), layout);
            let pieces = state
                .board()
                .cells()
                .filter(|(_, _, c)| *c != PlayerColour::Empty)
                .count();
            assert_eq!(frame.lit_count(), pieces);

            for (row, col, colour) in state.board().cells() {
                assert_eq!(frame.at(row, col), player_colour_to_neopixel_colour(colour));
            }
        }
    }
}

#[test]
fn heuristic_beats_random_more_often_than_not() {
    let mut heuristic_wins = 0;
    for seed in 0..20 {
        let state = play_out(
            &mut HeuristicAgent::with_seed(seed),
            &mut RandomAgent::with_seed(seed + 1000),
        );
        if state.outcome() == Some(GameOutcome::Winner(Player::Red)) {
            heuristic_wins += 1;
        }
    }
    assert!(heuristic_wins > 10, "heuristic won only {heuristic_wins}/20");
}

#[test]
fn raw_board_bytes_decode_to_frame_codes() {
    // A board stored as raw discriminants, including a corrupt byte.
    let raw: [u8; 4] = [0, 1, 2, 0xEE];
    let codes: Vec<u32> = raw.iter().map(|&b| neopixel_colour_from_raw(b)).collect();
    assert_eq!(codes, vec![0xFF0000, 0xFFFF00, 0x000000, 0x000000]);
}

#[test]
fn console_game_frame_counts_every_move() {
    // Three Red moves, each answered by the agent, then input runs dry.
    let mut game = ConsoleGame::new(
        "1\n2\n3\n".as_bytes(),
        Vec::new(),
        Some(Box::new(HeuristicAgent::with_seed(9)) as Box<dyn Agent>),
    );
    let err = game.play().unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);

    let frame = NeopixelFrame::from_board(game.state().board(), LedLayout::Serpentine);
    assert_eq!(frame.packed().len(), LED_COUNT);
    assert_eq!(frame.lit_count(), 6);
    assert_eq!(frame.at(7, 0), 0xFF0000);
    assert_eq!(
        frame.packed().iter().filter(|&&p| p == 0xFFFF00).count(),
        3
    );
}
