/// Single-value async load state.
///
/// One enum instead of separate loading/error/data signals, so a detail page
/// can never be "loading" and "errored" at the same time.
///
/// ```
/// let mut state = use_signal(|| DataState::Pending);
/// state.set(DataState::Loading);
/// state.set(collections::get_collection(&id).await.into());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DataState<T> {
    /// Nothing requested yet
    #[default]
    Pending,

    Loading,

    Loaded(T),

    /// Failed with a displayable message
    Error(String),
}

impl<T> DataState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Pending | DataState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, DataState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Apply `f` to loaded data in place (optimistic edits on detail pages)
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        if let DataState::Loaded(data) = self {
            f(data);
        }
    }

    pub fn map<U, F>(self, f: F) -> DataState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            DataState::Pending => DataState::Pending,
            DataState::Loading => DataState::Loading,
            DataState::Loaded(data) => DataState::Loaded(f(data)),
            DataState::Error(msg) => DataState::Error(msg),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for DataState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => DataState::Loaded(data),
            Err(err) => DataState::Error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_counts_as_loading() {
        let state: DataState<i32> = DataState::default();
        assert!(state.is_loading());
        assert!(!state.is_loaded());
    }

    #[test]
    fn test_update_only_touches_loaded() {
        let mut state = DataState::Loaded(vec![1]);
        state.update(|v| v.push(2));
        assert_eq!(state.data(), Some(&vec![1, 2]));

        let mut errored: DataState<Vec<i32>> = DataState::Error("boom".into());
        errored.update(|v| v.push(2));
        assert_eq!(errored.error(), Some("boom"));
    }

    #[test]
    fn test_from_result() {
        let state: DataState<u8> = Err::<u8, _>("Not found".to_string()).into();
        assert_eq!(state.error(), Some("Not found"));
        assert_eq!(DataState::from(Ok::<u8, String>(3)).map(|x| x * 2).data(), Some(&6));
    }
}
