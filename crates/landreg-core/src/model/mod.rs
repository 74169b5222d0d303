pub mod land_details;
pub mod land_owner;
pub mod owner_link;
pub mod property_details;
pub mod witness;

pub use land_details::LandDetails;
pub use land_owner::LandOwner;
pub use owner_link::LandDetailsLandOwner;
pub use property_details::PropertyDetails;
pub use witness::Witness;

/// Numeric identity assigned by the persistence layer
pub type EntityId = i64;

/// Entities that carry a persistence-assigned identity
pub trait Identified {
    fn id(&self) -> Option<EntityId>;

    fn set_id(&mut self, id: EntityId);
}

/// Entities owned by (or linked to) a single land-details record
pub trait LandDetailsChild {
    fn land_details_id(&self) -> Option<EntityId>;
}

macro_rules! impl_identified {
    ($($entity:ty),* $(,)?) => {
        $(
            impl Identified for $entity {
                fn id(&self) -> Option<EntityId> {
                    self.id
                }

                fn set_id(&mut self, id: EntityId) {
                    self.id = Some(id);
                }
            }
        )*
    };
}

impl_identified!(
    LandDetails,
    LandOwner,
    LandDetailsLandOwner,
    PropertyDetails,
    Witness
);

impl LandDetailsChild for LandDetailsLandOwner {
    fn land_details_id(&self) -> Option<EntityId> {
        Some(self.land_details_id)
    }
}

impl LandDetailsChild for PropertyDetails {
    fn land_details_id(&self) -> Option<EntityId> {
        self.land_details_id
    }
}

impl LandDetailsChild for Witness {
    fn land_details_id(&self) -> Option<EntityId> {
        self.land_details_id
    }
}
