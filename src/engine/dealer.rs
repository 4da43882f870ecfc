use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::engine::errors::EngineError;
use crate::eval;

/// Автоигра дилера: добирать, пока счёт меньше 17.
///
/// Единственное фиксированное правило дома: дилер останавливается
/// на ЛЮБЫХ 17 и выше, включая мягкие 17 (A+6) — `eval::score`
/// уже считает мягкие 17 как 17, поэтому цикл просто завершится.
/// Конфигурации этого правила нет намеренно.
pub fn dealer_play(dealer: &mut Hand, deck: &mut Deck) -> Result<(), EngineError> {
    while eval::score(&dealer.cards) < 17 {
        let card = deck.draw().ok_or(EngineError::DeckExhausted)?;
        dealer.cards.push(card);
    }
    Ok(())
}
