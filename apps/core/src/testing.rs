//! Recording doubles for the rendering ports.

use crate::catalog::LatLng;
use crate::error::{Error, Result};
use crate::ports::{
    ControlState, ControlView, InfoCardView, InfoFields, MapOptions, MapProvider, Navigator,
};

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
    pub opened: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, url: &str) {
        self.visited.push(url.to_string());
    }

    fn open_in_new_context(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}

#[derive(Debug, Default)]
pub struct RecordingInfoCard {
    pub writes: Vec<InfoFields>,
    pub missing_element: Option<&'static str>,
}

impl InfoCardView for RecordingInfoCard {
    fn update_info_fields(&mut self, fields: &InfoFields) -> Result<()> {
        if let Some(id) = self.missing_element {
            return Err(Error::MissingElement(format!("#{id}")));
        }
        self.writes.push(fields.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeMap(pub usize);

#[derive(Debug, Default)]
pub struct RecordingMapProvider {
    pub maps: Vec<(String, MapOptions)>,
    pub markers: Vec<(FakeMap, LatLng)>,
    pub unavailable: bool,
}

impl MapProvider for RecordingMapProvider {
    type Map = FakeMap;

    fn create_map(&mut self, container_id: &str, options: &MapOptions) -> Result<FakeMap> {
        if self.unavailable {
            return Err(Error::Dom("maps library not loaded".to_string()));
        }
        self.maps.push((container_id.to_string(), *options));
        Ok(FakeMap(self.maps.len() - 1))
    }

    fn create_marker(&mut self, map: &FakeMap, position: LatLng) -> Result<()> {
        self.markers.push((*map, position));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingControl {
    pub states: Vec<ControlState>,
}

impl RecordingControl {
    pub fn glyph(&self) -> Option<&'static str> {
        self.states.last().map(|state| state.glyph())
    }
}

impl ControlView for RecordingControl {
    fn set_control_state(&mut self, state: ControlState) {
        self.states.push(state);
    }
}
