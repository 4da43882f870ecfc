//! Оценка руки блэкджека: чистые функции без состояния.
//!
//! Используются и движком раунда, и автоигрой дилера.
//! Все предикаты работают по срезу карт, ничего не мутируют.

use crate::domain::card::{Card, Rank};

/// Лучший счёт руки.
///
/// Каждый туз сначала считается как 11; пока сумма больше 21 и есть
/// туз, который ещё можно понизить, понижаем по одному тузу до 1.
/// Никогда не понижаем больше, чем необходимо.
pub fn score(cards: &[Card]) -> u8 {
    let mut total: u32 = cards.iter().map(|c| c.rank.base_value() as u32).sum();
    let mut soft_aces = cards.iter().filter(|c| c.rank == Rank::Ace).count();

    while total > 21 && soft_aces > 0 {
        total -= 10; // один туз: 11 → 1
        soft_aces -= 1;
    }

    // Реальные руки не превышают и пары десятков карт, но функция
    // публичная: вместо усечения — насыщение.
    total.min(u8::MAX as u32) as u8
}

/// Перебор: счёт больше 21.
pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > 21
}

/// Натуральный блэкджек: ровно две карты и счёт 21.
/// Трёхкарточные 21 блэкджеком не являются.
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == 21
}

/// Можно ли сплитовать: ровно две карты равной стоимости,
/// причём 10/J/Q/K взаимозаменяемы (все стоят 10).
pub fn can_split(cards: &[Card]) -> bool {
    cards.len() == 2 && cards[0].rank.base_value() == cards[1].rank.base_value()
}

/// Можно ли удвоить: ровно две карты — дабл доступен только
/// первым решением по руке, независимо от её стоимости.
pub fn can_double(cards: &[Card]) -> bool {
    cards.len() == 2
}
