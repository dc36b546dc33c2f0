//! Single-key table sorting shared by every sortable view.

use std::cmp::Ordering;

/// Value a row exposes for the active sort key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortValue<'a> {
	Number(f64),
	/// A nullable numeric field that is null for this row.
	Missing,
	Text(&'a str),
}

/// A column a table can be sorted by.
pub trait SortKey: Copy + PartialEq {
	type Row;

	fn value(self, row: &Self::Row) -> SortValue<'_>;

	/// Column header text.
	fn label(self) -> &'static str;
}

/// Active sort key and direction.
///
/// A newly selected key starts descending; selecting the active key again
/// flips the direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState<K> {
	pub key: K,
	pub ascending: bool,
}

impl<K: Copy + PartialEq> SortState<K> {
	/// Descending sort on `key`.
	pub fn new(key: K) -> Self {
		Self {
			key,
			ascending: false,
		}
	}

	/// Applies a header click on `key`.
	pub fn select(&mut self, key: K) {
		if key == self.key {
			self.ascending = !self.ascending;
		} else {
			self.key = key;
			self.ascending = false;
		}
	}

	/// Direction marker for a column header: `" ^"`, `" v"` or empty when inactive.
	pub fn indicator(&self, key: K) -> &'static str {
		match (key == self.key, self.ascending) {
			(false, _) => "",
			(true, true) => " ^",
			(true, false) => " v",
		}
	}
}

/// Orders two values for the given direction.
///
/// Missing values come first ascending and last descending. NaN compares
/// equal to everything so it never reorders a stable run.
pub fn compare(a: SortValue<'_>, b: SortValue<'_>, ascending: bool) -> Ordering {
	let ord = match (a, b) {
		(SortValue::Missing, SortValue::Missing) => Ordering::Equal,
		(SortValue::Missing, _) => Ordering::Less,
		(_, SortValue::Missing) => Ordering::Greater,
		(SortValue::Number(x), SortValue::Number(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
		(SortValue::Text(x), SortValue::Text(y)) => x.cmp(y),
		_ => Ordering::Equal,
	};
	if ascending { ord } else { ord.reverse() }
}

/// Stable sort of `rows` by the state's key and direction.
pub fn sort_rows<K: SortKey>(rows: &mut [K::Row], state: &SortState<K>) {
	rows.sort_by(|a, b| compare(state.key.value(a), state.key.value(b), state.ascending));
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	struct Row {
		name: &'static str,
		cost: Option<f64>,
		risk: f64,
	}

	#[derive(Clone, Copy, Debug, PartialEq)]
	enum Key {
		Name,
		Cost,
		Risk,
	}

	impl SortKey for Key {
		type Row = Row;

		fn value(self, row: &Row) -> SortValue<'_> {
			match self {
				Key::Name => SortValue::Text(row.name),
				Key::Cost => row.cost.map_or(SortValue::Missing, SortValue::Number),
				Key::Risk => SortValue::Number(row.risk),
			}
		}

		fn label(self) -> &'static str {
			match self {
				Key::Name => "Name",
				Key::Cost => "Cost",
				Key::Risk => "Risk",
			}
		}
	}

	fn rows() -> Vec<Row> {
		vec![
			Row { name: "b", cost: Some(2.0), risk: 0.5 },
			Row { name: "a", cost: None, risk: 0.9 },
			Row { name: "c", cost: Some(1.0), risk: 0.5 },
			Row { name: "d", cost: None, risk: 0.1 },
		]
	}

	fn names(rows: &[Row]) -> Vec<&'static str> {
		rows.iter().map(|r| r.name).collect()
	}

	#[test]
	fn new_key_sorts_descending_then_toggles() {
		let mut state = SortState::new(Key::Name);
		state.select(Key::Risk);
		assert_eq!(state, SortState { key: Key::Risk, ascending: false });

		let mut r = rows();
		sort_rows(&mut r, &state);
		assert_eq!(names(&r), ["a", "b", "c", "d"]);

		state.select(Key::Risk);
		assert!(state.ascending);
		sort_rows(&mut r, &state);
		assert_eq!(names(&r), ["d", "b", "c", "a"]);
	}

	#[test]
	fn switching_key_resets_to_descending() {
		let mut state = SortState::new(Key::Risk);
		state.select(Key::Risk);
		assert!(state.ascending);
		state.select(Key::Cost);
		assert!(!state.ascending);
	}

	#[test]
	fn missing_values_lead_ascending_and_trail_descending() {
		let mut r = rows();
		sort_rows(&mut r, &SortState { key: Key::Cost, ascending: true });
		assert_eq!(names(&r), ["a", "d", "c", "b"]);

		sort_rows(&mut r, &SortState { key: Key::Cost, ascending: false });
		assert_eq!(names(&r), ["b", "c", "a", "d"]);
	}

	#[test]
	fn ties_keep_storage_order() {
		let mut r = rows();
		sort_rows(&mut r, &SortState { key: Key::Risk, ascending: true });
		let tied: Vec<_> = r.iter().filter(|x| x.risk == 0.5).map(|x| x.name).collect();
		assert_eq!(tied, ["b", "c"]);
	}

	#[test]
	fn text_keys_sort_lexicographically() {
		let mut r = rows();
		sort_rows(&mut r, &SortState { key: Key::Name, ascending: true });
		assert_eq!(names(&r), ["a", "b", "c", "d"]);
	}

	#[test]
	fn indicator_marks_only_the_active_column() {
		let mut state = SortState::new(Key::Risk);
		assert_eq!(state.indicator(Key::Risk), " v");
		assert_eq!(state.indicator(Key::Cost), "");
		state.select(Key::Risk);
		assert_eq!(state.indicator(Key::Risk), " ^");
		assert_eq!(Key::Cost.label(), "Cost");
	}
}
