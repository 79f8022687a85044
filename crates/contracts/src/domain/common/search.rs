/// Тип, поддерживающий поиск по строке фильтра
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Регистронезависимое вхождение хотя бы в одно поле. Пустой фильтр подходит всем.
pub fn matches_any(fields: &[&str], filter: &str) -> bool {
    let filter = filter.trim();
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Отбор элементов по фильтру и дополнительному предикату
pub fn filter_list<T, P>(items: &[T], filter: &str, extra: P) -> Vec<T>
where
    T: Searchable + Clone,
    P: Fn(&T) -> bool,
{
    items
        .iter()
        .filter(|item| item.matches_filter(filter) && extra(item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches() {
        assert!(matches_any(&["V001"], ""));
        assert!(matches_any(&["V001"], "   "));
        assert!(matches_any(&[], ""));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(matches_any(&["Delivery Van 1", "Cargo Van"], "van 1"));
        assert!(matches_any(&["Delivery Van 1", "Cargo Van"], "CARGO"));
        assert!(!matches_any(&["Delivery Van 1"], "truck"));
    }
}
