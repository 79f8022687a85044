//! Перечисления со строковым кодом (статусы, типы, роли).

/// Значение с устойчивым строковым кодом и человекочитаемым названием
pub trait Coded: Copy + Eq + Send + Sync + std::fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn code(&self) -> &'static str;
    fn display_name(&self) -> &'static str;

    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.code() == code)
    }
}

/// Объявляет enum с кодами. Коды используются и в serde, и в значениях
/// `<select>`, поэтому задаются один раз.
#[macro_export]
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $code)] $variant),+
        }

        impl $crate::domain::common::Coded for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            fn display_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }
    };
}

/// Выбор в фильтре: "все" или конкретное значение
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: Coded> Choice<T> {
    pub const ALL_CODE: &'static str = "all";

    pub fn matches(&self, value: T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(expected) => *expected == value,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Choice::All => Self::ALL_CODE,
            Choice::Only(value) => value.code(),
        }
    }

    /// Неизвестный код трактуется как "все"
    pub fn from_code(code: &str) -> Self {
        T::from_code(code).map(Choice::Only).unwrap_or(Choice::All)
    }

    /// Пары (код, название) для выпадающего списка, начиная с "All"
    pub fn options(all_label: &'static str) -> Vec<(&'static str, &'static str)> {
        std::iter::once((Self::ALL_CODE, all_label))
            .chain(T::ALL.iter().map(|v| (v.code(), v.display_name())))
            .collect()
    }
}
