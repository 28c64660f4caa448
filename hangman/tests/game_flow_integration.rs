/// Integration tests for complete rounds
///
/// These tests drive rounds from creation to the end through the public
/// API, carrying the state through a round token between moves the way
/// the server does.
use hangman::{
    Engine, Feedback, GameError, GameState, MAX_ATTEMPTS, Username,
    catalog::{RandomSource, WordCatalog},
    session::SessionCodec,
};

const SECRET: &str = "integration_test_secret_of_32_chars";

/// Always picks the first word.
struct FirstWord;

impl RandomSource for FirstWord {
    fn pick(&mut self, _n: usize) -> usize {
        0
    }
}

fn engine() -> Engine {
    let catalog = WordCatalog::parse("facile:chat\nmoyen:bonjour\ndifficile:anticonstitutionnellement\n");
    Engine::new(catalog, "facile", FirstWord).unwrap()
}

/// Applies a guess after a token round trip, like one HTTP request.
fn play(codec: &SessionCodec, token: &str, guess: &str) -> (String, GameState) {
    let mut state = codec.decode(token).unwrap();
    state.apply_guess(guess).unwrap();
    (codec.encode(&state).unwrap(), state)
}

#[test]
fn test_chat_round() {
    let engine = engine();
    let mut state = engine.start_round("alice", "facile").unwrap();
    assert_eq!(state.secret(), "CHAT");

    assert_eq!(state.apply_guess("C").unwrap(), Feedback::CorrectLetter);
    assert_eq!(state.reveal_string(), "C _ _ _");
    assert_eq!(state.attempts_remaining(), 6);

    assert_eq!(state.apply_guess("Z").unwrap(), Feedback::WrongLetter);
    assert_eq!(state.attempts_remaining(), 5);

    state.apply_guess("CHAT").unwrap();
    assert_eq!(state.reveal_string(), "C H A T");
    assert!(state.is_finished());
    assert!(state.is_won());
}

#[test]
fn test_bonjour_six_wrong_letters() {
    let engine = engine();
    let mut state = engine.start_round("bob", "moyen").unwrap();
    assert_eq!(state.secret(), "BONJOUR");

    for letter in ["X", "Y", "Z", "Q", "W", "K"] {
        assert_eq!(state.apply_guess(letter).unwrap(), Feedback::WrongLetter);
    }

    assert_eq!(state.attempts_remaining(), 0);
    assert!(state.is_finished());
    assert!(!state.is_won());
    assert_eq!(state.reveal_string(), "_ _ _ _ _ _ _");
}

#[test]
fn test_six_wrong_words_lose() {
    let engine = engine();
    let mut state = engine.start_round("bob", "moyen").unwrap();

    for _ in 0..MAX_ATTEMPTS {
        assert_eq!(state.apply_guess("bonsoir").unwrap(), Feedback::WrongWord);
    }

    assert!(state.is_finished());
    assert!(!state.is_won());
    assert_eq!(state.apply_guess("bonjour"), Err(GameError::RoundOver));
}

#[test]
fn test_round_through_tokens() {
    let engine = engine();
    let codec = SessionCodec::new(SECRET);
    let token = codec
        .encode(&engine.start_round("carol", "facile").unwrap())
        .unwrap();

    let (token, state) = play(&codec, &token, "a");
    assert_eq!(state.reveal_string(), "_ _ A _");

    let (token, _) = play(&codec, &token, "t");
    let (token, _) = play(&codec, &token, "h");
    let (_, state) = play(&codec, &token, "c");

    assert!(state.is_finished());
    assert!(state.is_won());
    assert_eq!(state.tried_letters(), &['A', 'T', 'H', 'C']);
}

#[test]
fn test_hints_then_guess() {
    let engine = engine();
    let mut state = engine.start_round("dave", "facile").unwrap();

    assert_eq!(state.apply_hint().unwrap(), Feedback::HintUsed);
    assert_eq!(state.reveal_string(), "C _ _ _");
    assert_eq!(state.apply_hint().unwrap(), Feedback::HintUsed);
    assert_eq!(state.reveal_string(), "C H _ _");
    assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS - 2);

    // Already revealed by a hint.
    assert_eq!(state.apply_guess("h").unwrap(), Feedback::LetterAlreadyTried);
    assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS - 2);

    state.apply_guess("chat").unwrap();
    assert!(state.is_won());
    assert_eq!(state.attempts_used(), 2);
}

#[test]
fn test_hints_alone_solve_the_word() {
    let engine = engine();
    let mut state = engine.start_round("erin", "facile").unwrap();

    for _ in 0..4 {
        state.apply_hint().unwrap();
    }

    assert!(state.is_finished());
    assert!(state.is_won());
    assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS - 4);
    assert_eq!(state.apply_hint(), Err(GameError::RoundOver));
}

#[test]
fn test_message_is_overwritten_each_move() {
    let mut state = GameState::new(Username::new("frank"), "facile", "chat");

    state.apply_guess("z").unwrap();
    assert_eq!(state.message(), Some(Feedback::WrongLetter));
    state.apply_guess("").unwrap();
    assert_eq!(state.message(), Some(Feedback::EmptyGuess));
    state.apply_guess("12").unwrap();
    assert_eq!(state.message(), Some(Feedback::InvalidEntry));
    assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS - 1);
}

#[test]
fn test_missing_inputs_rejected_before_round() {
    let engine = engine();
    assert!(matches!(
        engine.start_round("", "facile"),
        Err(GameError::MissingInput(_))
    ));
    assert!(matches!(
        engine.start_round("alice", "  "),
        Err(GameError::MissingInput(_))
    ));
}
