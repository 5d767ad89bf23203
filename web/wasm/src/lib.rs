use hilo::{Card, Game, GameOptions, GameOverReason, GameState, Guess, TurnReason, TurnResult};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn begin(&mut self) -> Result<(), JsValue> {
        self.game.begin().map_err(js_err)
    }

    /// Takes `"h"`/`"higher"` or `"l"`/`"lower"`.
    pub fn guess(&mut self, input: &str) -> Result<JsValue, JsValue> {
        let guess: Guess = input.parse().map_err(js_err)?;
        let result = self.game.check_higher_or_lower(guess).map_err(js_err)?;
        to_js_value(&JsTurnResult::from(result))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            current: self.game.current_card().ok().map(JsCard::from),
            challenger: self.game.challenging_card().ok().map(JsCard::from),
            score: self.game.score().ok().map(|score| score as u32),
            cards_remaining: self
                .game
                .remaining_cards()
                .ok()
                .map(|remaining| remaining as u32),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    current: Option<JsCard>,
    challenger: Option<JsCard>,
    score: Option<u32>,
    cards_remaining: Option<u32>,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    value: u8,
    label: String,
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            suit: card.suit().name(),
            rank: card.rank().label(),
            value: card.value(),
            label: card.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsTurnResult {
    current: JsCard,
    challenger: JsCard,
    guess: &'static str,
    correct: bool,
    score: u32,
    remaining: u32,
    game_over: bool,
    reason: Option<String>,
}

impl From<TurnResult> for JsTurnResult {
    fn from(result: TurnResult) -> Self {
        Self {
            current: result.current.into(),
            challenger: result.challenger.into(),
            guess: guess_to_str(result.guess),
            correct: result.correct,
            score: result.score as u32,
            remaining: result.remaining as u32,
            game_over: result.game_over,
            reason: result.reason.map(|reason: TurnReason| reason.to_string()),
        }
    }
}

fn guess_to_str(guess: Guess) -> &'static str {
    match guess {
        Guess::Higher => "Higher",
        Guess::Lower => "Lower",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::NotStarted => "NotStarted",
        GameState::InProgress => "InProgress",
        GameState::GameOver(GameOverReason::WrongGuess) => "Lost",
        GameState::GameOver(GameOverReason::DeckExhausted) => "Won",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
