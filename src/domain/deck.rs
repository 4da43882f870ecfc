use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт. Раунд получает её уже перетасованной при `Deal`
/// (тасует engine через RandomSource, НЕ домен), владеет ею
/// единолично и выбрасывает вместе с раундом.
///
/// Инвариант: одна и та же карта не может быть вытянута дважды
/// за время жизни колоды (draw только снимает карты, ничего не возвращает).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades] {
            for rank in [
                Rank::Two,
                Rank::Three,
                Rank::Four,
                Rank::Five,
                Rank::Six,
                Rank::Seven,
                Rank::Eight,
                Rank::Nine,
                Rank::Ten,
                Rank::Jack,
                Rank::Queen,
                Rank::King,
                Rank::Ace,
            ] {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Колода с заранее заданным порядком выдачи:
    /// первый элемент среза будет вытянут первым.
    ///
    /// Нужна для реплея раундов и детерминированных тестов.
    pub fn from_draw_order(draw_order: &[Card]) -> Self {
        let mut cards: Vec<Card> = draw_order.to_vec();
        cards.reverse();
        Deck { cards }
    }

    /// Сколько карт ещё не вытянуто.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    /// `None` означает исчерпание — в реальном раунде этого не бывает.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}
