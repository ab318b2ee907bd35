use std::collections::HashMap;
use std::hash::Hash;

use chrono::Utc;

struct EDValue<T> {
    val: T,
    ts: i64,
}

impl <T> EDValue<T> {
    pub fn new(val: T, ts: i64) -> EDValue<T> {
        EDValue {
            val,
            ts,
        }
    }
}

/// Dict whose records become unavailable once older than the configured ttl.
/// There is no background reaper; expired records are dropped on access.
pub struct ExpiringDict <T:Eq+Hash+Clone, U> {
    dict: HashMap<T, EDValue<U>>,
    ttl: i64,   // [ms]
}

impl <T:Eq+Hash+Clone, U> ExpiringDict<T, U> {
    pub fn new(ttl: i64) -> ExpiringDict<T, U> {
        ExpiringDict {
            dict: HashMap::new(),
            ttl,
        }
    }

    pub fn insert(&mut self, key: T, val: U) {
        let ts = Utc::now().timestamp_millis();
        let value = EDValue::new(val, ts);
        self.dict.insert(key, value);
    }

    pub fn get(&mut self, key: &T) -> Option<&U> {
        if self.is_expired(key) {
            self.dict.remove(key);
            return None;
        }

        self.dict.get(key).map(|v| &v.val)
    }

    pub fn contains_key(&mut self, key: &T) -> bool {
        self.get(key).is_some()
    }

    fn is_expired(&self, key: &T) -> bool {
        match self.dict.get(key) {
            Some(v) => Utc::now().timestamp_millis() - v.ts > self.ttl,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use super::ExpiringDict;

    #[test]
    fn fresh_record_is_returned() {
        let mut dict: ExpiringDict<String, u32> = ExpiringDict::new(60_000);
        dict.insert("a".into(), 42);

        assert_eq!(dict.get(&"a".into()), Some(&42));
        assert!(dict.contains_key(&"a".into()));
        assert_eq!(dict.get(&"b".into()), None);
    }

    #[test]
    fn expired_record_is_dropped() {
        let mut dict: ExpiringDict<String, u32> = ExpiringDict::new(10);
        dict.insert("a".into(), 42);

        thread::sleep(Duration::from_millis(30));
        assert_eq!(dict.get(&"a".into()), None);
        assert!(!dict.contains_key(&"a".into()));
    }

    #[test]
    fn reinsert_refreshes_ttl() {
        let mut dict: ExpiringDict<String, u32> = ExpiringDict::new(10);
        dict.insert("a".into(), 1);

        thread::sleep(Duration::from_millis(30));
        dict.insert("a".into(), 2);
        assert_eq!(dict.get(&"a".into()), Some(&2));
    }
}
