//! Section ordering by group key.

/// Priority of any group not listed in [`GROUP_PRIORITIES`].
pub const DEFAULT_GROUP_PRIORITY: u32 = 100;

/// Hand-maintained section order for the distributor's catalog. Lower comes first.
pub const GROUP_PRIORITIES: &[(&str, u32)] = &[
    ("Приемно-контрольные-приборы", 10),
    ("Контроллеры", 11),
    ("Расширители", 12),
    ("Датчики-и-извещатели", 13),
    ("Панели-управления", 14),
    ("Ручные-извещатели", 15),
    ("Блоки-управления", 16),
    ("Модули-расширения", 17),
    ("Оповещатели", 18),
    ("Блоки-питания", 19),
    ("Кабельная-продукция", 20),
    ("Корпуса-и-шкафы", 21),
    // service equipment goes last
    ("Инструменты", 998),
    ("Сервисное-оборудование", 999),
];

/// Priority of a normalized group key (exact match).
pub fn group_priority(key: &str) -> u32 {
    GROUP_PRIORITIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, p)| *p)
        .unwrap_or(DEFAULT_GROUP_PRIORITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::normalize_group_name;

    #[test]
    fn listed_keys() {
        assert_eq!(group_priority("Приемно-контрольные-приборы"), 10);
        assert_eq!(group_priority("Корпуса-и-шкафы"), 21);
        assert_eq!(group_priority("Инструменты"), 998);
        assert_eq!(group_priority("Сервисное-оборудование"), 999);
    }

    #[test]
    fn unlisted_keys_get_default() {
        assert_eq!(group_priority("Другие-товары"), DEFAULT_GROUP_PRIORITY);
        // lookup is exact, so a spaced name must be normalized first
        assert_eq!(group_priority("Кабельная продукция"), DEFAULT_GROUP_PRIORITY);
        assert_eq!(group_priority(&normalize_group_name("Кабельная продукция")), 20);
    }

    #[test]
    fn table_keys_are_normalized_and_unique() {
        for (i, (key, _)) in GROUP_PRIORITIES.iter().enumerate() {
            assert_eq!(normalize_group_name(key), *key);
            assert!(GROUP_PRIORITIES[i + 1..].iter().all(|(other, _)| other != key));
        }
    }
}
