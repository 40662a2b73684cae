//! Mission Controller
//!
//! [`MissionEditor`] is the capability set plan creators drive: clear the
//! plan, insert takeoff/preset items, read an item's resolved coordinate,
//! and toggle wizard mode. [`MissionController`] is the in-memory editor
//! behind the plan view.
//!
//! # Item resolution
//!
//! - Takeoff: launch point is the requested coordinate, takeoff point is the
//!   same lat/lon at the takeoff altitude. Starts in wizard mode.
//! - Land: requested lat/lon at altitude 0.
//! - Anything else: requested lat/lon at the altitude of the nearest
//!   preceding non-land NAV item, or the default altitude.

use super::command::{
    cmd_has_location, ItemKind, MAV_CMD_NAV_LAND, MAV_CMD_NAV_TAKEOFF, MAV_CMD_NAV_VTOL_LAND,
    MAV_CMD_NAV_VTOL_TAKEOFF,
};
use super::coordinate::GeoCoordinate;
use super::error::MissionError;
use super::item::{ItemId, MissionItem};
use super::settings::{PlanSettings, VehicleClass};
use super::InsertAt;

/// Touchdown altitude for land items (relative to home)
const LAND_ALTITUDE: f64 = 0.0;

/// Mission editing contract consumed by plan creators.
#[cfg_attr(test, mockall::automock)]
pub trait MissionEditor {
    /// Remove every item from the plan.
    fn remove_all(&mut self);

    /// Insert a takeoff item launching from `coordinate`.
    fn insert_takeoff_item(
        &mut self,
        coordinate: GeoCoordinate,
        at: InsertAt,
        make_current: bool,
    ) -> Result<ItemId, MissionError>;

    /// Insert a simple item for `command` at `coordinate`.
    fn insert_preset_item(
        &mut self,
        coordinate: GeoCoordinate,
        command: u16,
        at: InsertAt,
        make_current: bool,
    ) -> Result<ItemId, MissionError>;

    /// Resolved coordinate of an existing item.
    fn item_coordinate(&self, id: ItemId) -> Result<GeoCoordinate, MissionError>;

    /// Enable or disable the guided editing flow for an item.
    fn set_wizard_mode(&mut self, id: ItemId, wizard_mode: bool) -> Result<(), MissionError>;
}

/// In-memory mission editor.
#[derive(Debug, Clone)]
pub struct MissionController {
    settings: PlanSettings,
    items: Vec<MissionItem>,
    planned_home: Option<GeoCoordinate>,
    current_plan_view_seq: u16,
    next_id: u32,
    dirty: bool,
}

impl Default for MissionController {
    fn default() -> Self {
        Self::new(PlanSettings::default())
    }
}

impl MissionController {
    /// Create an empty controller. Settings are clamped into range.
    pub fn new(settings: PlanSettings) -> Self {
        Self {
            settings: settings.clamped(),
            items: Vec::new(),
            planned_home: None,
            current_plan_view_seq: 0,
            next_id: 1,
            dirty: false,
        }
    }

    pub fn settings(&self) -> &PlanSettings {
        &self.settings
    }

    /// All items in plan order
    pub fn items(&self) -> &[MissionItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&MissionItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut MissionItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Kinds of all items in plan order
    pub fn kinds(&self) -> Vec<ItemKind> {
        self.items.iter().map(MissionItem::kind).collect()
    }

    /// Planned home position (sequence 0), set by the first takeoff
    pub fn planned_home(&self) -> Option<GeoCoordinate> {
        self.planned_home
    }

    /// Sequence number selected in the plan view (0 = home)
    pub fn current_plan_view_seq(&self) -> u16 {
        self.current_plan_view_seq
    }

    /// Plan changed since the flag was last cleared
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    fn takeoff_command(&self) -> u16 {
        match self.settings.vehicle_class {
            VehicleClass::Vtol => MAV_CMD_NAV_VTOL_TAKEOFF,
            _ => MAV_CMD_NAV_TAKEOFF,
        }
    }

    fn land_command(&self) -> u16 {
        match self.settings.vehicle_class {
            VehicleClass::Vtol => MAV_CMD_NAV_VTOL_LAND,
            _ => MAV_CMD_NAV_LAND,
        }
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Resolve `at` into a position, checking bounds and capacity.
    fn insert_position(&self, at: InsertAt) -> Result<usize, MissionError> {
        if self.items.len() >= self.settings.max_items {
            return Err(MissionError::MissionFull(self.settings.max_items));
        }

        match at {
            InsertAt::End => Ok(self.items.len()),
            InsertAt::Index(index) if index <= self.items.len() => Ok(index),
            InsertAt::Index(index) => Err(MissionError::IndexOutOfRange {
                index,
                len: self.items.len(),
            }),
        }
    }

    /// Altitude of the nearest non-land NAV item before `position`.
    fn previous_altitude(&self, position: usize) -> Option<f64> {
        self.items[..position]
            .iter()
            .rev()
            .filter(|item| cmd_has_location(item.command) && item.kind() != ItemKind::Land)
            .find_map(|item| item.coordinate.altitude)
    }

    fn place(&mut self, position: usize, item: MissionItem, make_current: bool) -> ItemId {
        let id = item.id();
        self.items.insert(position, item);
        self.renumber();
        self.dirty = true;

        if make_current {
            self.current_plan_view_seq = (position + 1) as u16;
        }

        id
    }

    fn renumber(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.seq = (index + 1) as u16;
        }
    }
}

impl MissionEditor for MissionController {
    fn remove_all(&mut self) {
        log::debug!("Removing all {} mission items", self.items.len());
        self.items.clear();
        self.planned_home = None;
        self.current_plan_view_seq = 0;
        self.dirty = true;
    }

    fn insert_takeoff_item(
        &mut self,
        coordinate: GeoCoordinate,
        at: InsertAt,
        make_current: bool,
    ) -> Result<ItemId, MissionError> {
        let position = self.insert_position(at)?;
        let id = self.allocate_id();

        let takeoff_point = coordinate.at_altitude(self.settings.takeoff_altitude);
        let mut item = MissionItem::new(id, self.takeoff_command(), takeoff_point);
        item.launch_coordinate = Some(coordinate);
        item.launch_takeoff_at_same_location =
            self.settings.vehicle_class.launch_takeoff_at_same_location();
        item.set_wizard_mode(true);

        if self.planned_home.is_none() {
            log::debug!("Planned home set from takeoff launch point {}", coordinate);
            self.planned_home = Some(coordinate);
        }

        log::debug!("Inserted takeoff {} at position {}", id, position);
        Ok(self.place(position, item, make_current))
    }

    fn insert_preset_item(
        &mut self,
        coordinate: GeoCoordinate,
        command: u16,
        at: InsertAt,
        make_current: bool,
    ) -> Result<ItemId, MissionError> {
        if !cmd_has_location(command) {
            return Err(MissionError::UnsupportedCommand(command));
        }
        let position = self.insert_position(at)?;
        let id = self.allocate_id();

        let (command, altitude) = match ItemKind::from_command(command) {
            ItemKind::Land => (self.land_command(), LAND_ALTITUDE),
            _ => (
                command,
                self.previous_altitude(position)
                    .unwrap_or(self.settings.default_altitude),
            ),
        };

        let item = MissionItem::new(id, command, coordinate.at_altitude(altitude));

        log::debug!(
            "Inserted command {} {} at position {}",
            command,
            id,
            position
        );
        Ok(self.place(position, item, make_current))
    }

    fn item_coordinate(&self, id: ItemId) -> Result<GeoCoordinate, MissionError> {
        self.item(id)
            .map(MissionItem::coordinate)
            .ok_or(MissionError::ItemNotFound(id))
    }

    fn set_wizard_mode(&mut self, id: ItemId, wizard_mode: bool) -> Result<(), MissionError> {
        let item = self.item_mut(id).ok_or(MissionError::ItemNotFound(id))?;
        item.set_wizard_mode(wizard_mode);
        Ok(())
    }
}
