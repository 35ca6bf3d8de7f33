//! Material streams and the table that owns them.

use crate::error::{DeviceError, DeviceResult};
use core::fmt;
use core::ops::{Index, IndexMut};
use sf_core::StreamId;
use sf_core::units::{MassRate, as_kgps, kgps};

/// A named carrier of a single mass flow rate.
///
/// Any sign is accepted; a negative flow is stored as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    name: String,
    mass_flow: MassRate,
}

impl Stream {
    /// New stream with zero flow.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_mass_flow(name, kgps(0.0))
    }

    pub fn with_mass_flow(name: impl Into<String>, mass_flow: MassRate) -> Self {
        Self {
            name: name.into(),
            mass_flow,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass_flow(&self) -> MassRate {
        self.mass_flow
    }

    pub fn set_mass_flow(&mut self, mass_flow: MassRate) {
        self.mass_flow = mass_flow;
    }

    /// Human-readable one-liner with name and flow in kg/s.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stream {}: mass flow = {} kg/s",
            self.name,
            as_kgps(self.mass_flow)
        )
    }
}

/// Arena owning every stream of a flowsheet.
///
/// Devices refer to streams by `StreamId`, so one stream can be attached to
/// several devices at once. Ids are only meaningful for the table that issued
/// them. Mutation goes through `&mut StreamTable`, so callers sharing a table
/// across threads must synchronize it themselves.
#[derive(Debug, Clone, Default)]
pub struct StreamTable {
    streams: Vec<Stream>,
}

impl StreamTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stream and return its id.
    pub fn add(&mut self, name: impl Into<String>, mass_flow: MassRate) -> StreamId {
        self.insert(Stream::with_mass_flow(name, mass_flow))
    }

    pub fn insert(&mut self, stream: Stream) -> StreamId {
        let id = StreamId::from_slot(self.streams.len());
        self.streams.push(stream);
        id
    }

    pub fn get(&self, id: StreamId) -> Option<&Stream> {
        self.streams.get(id.slot())
    }

    pub fn get_mut(&mut self, id: StreamId) -> Option<&mut Stream> {
        self.streams.get_mut(id.slot())
    }

    /// Like `get`, but an unknown id is a `DeviceError`.
    pub fn stream(&self, id: StreamId) -> DeviceResult<&Stream> {
        self.get(id).ok_or(DeviceError::UnknownStream { id })
    }

    pub fn mass_flow(&self, id: StreamId) -> DeviceResult<MassRate> {
        self.stream(id).map(Stream::mass_flow)
    }

    pub fn set_mass_flow(&mut self, id: StreamId, mass_flow: MassRate) -> DeviceResult<()> {
        let stream = self
            .get_mut(id)
            .ok_or(DeviceError::UnknownStream { id })?;
        stream.set_mass_flow(mass_flow);
        Ok(())
    }

    /// Id of the first stream named `name`.
    pub fn find_by_name(&self, name: &str) -> Option<StreamId> {
        self.streams
            .iter()
            .position(|s| s.name == name)
            .map(StreamId::from_slot)
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StreamId, &Stream)> {
        self.streams
            .iter()
            .enumerate()
            .map(|(i, s)| (StreamId::from_slot(i), s))
    }
}

impl Index<StreamId> for StreamTable {
    type Output = Stream;

    fn index(&self, id: StreamId) -> &Stream {
        &self.streams[id.slot()]
    }
}

impl IndexMut<StreamId> for StreamTable {
    fn index_mut(&mut self, id: StreamId) -> &mut Stream {
        &mut self.streams[id.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::Id;

    #[test]
    fn set_and_get_mass_flow() {
        let mut s = Stream::with_mass_flow("test_stream", kgps(5.5));
        s.set_mass_flow(kgps(10.2));
        assert_eq!(as_kgps(s.mass_flow()), 10.2);
        assert_eq!(s.name(), "test_stream");
    }

    #[test]
    fn new_stream_has_zero_flow() {
        let s = Stream::new("s1");
        assert_eq!(as_kgps(s.mass_flow()), 0.0);
    }

    #[test]
    fn negative_flow_is_stored_as_given() {
        let mut s = Stream::new("reverse");
        s.set_mass_flow(kgps(-3.0));
        assert_eq!(as_kgps(s.mass_flow()), -3.0);
    }

    #[test]
    fn describe_names_stream_and_flow() {
        let s = Stream::with_mass_flow("s3", kgps(18.0));
        assert_eq!(s.describe(), "Stream s3: mass flow = 18 kg/s");
        assert_eq!(s.describe(), format!("{s}"));
    }

    #[test]
    fn table_issues_sequential_ids() {
        let mut table = StreamTable::new();
        let a = table.add("a", kgps(1.0));
        let b = table.add("b", kgps(2.0));
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(table.len(), 2);
        assert_eq!(table[b].name(), "b");
        assert_eq!(table.find_by_name("a"), Some(a));
        assert_eq!(table.find_by_name("zzz"), None);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut table = StreamTable::new();
        table.add("only", kgps(1.0));
        let foreign = Id::from_index(5);

        assert!(table.get(foreign).is_none());
        assert_eq!(
            table.mass_flow(foreign),
            Err(DeviceError::UnknownStream { id: foreign })
        );
        assert!(table.set_mass_flow(foreign, kgps(2.0)).is_err());
    }

    #[test]
    fn iter_yields_ids_in_insertion_order() {
        let mut table = StreamTable::new();
        table.add("x", kgps(0.0));
        table.add("y", kgps(0.0));
        let names: Vec<_> = table.iter().map(|(id, s)| (id.index(), s.name())).collect();
        assert_eq!(names, vec![(0, "x"), (1, "y")]);
    }
}
