use shared_types::PersonId;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub full_name: String,
    pub phone: String,
    pub currency: String,
    pub price: f64,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

/// Storage form of a registration before the data layer assigns an id
#[derive(Clone, Debug, PartialEq)]
pub struct CreatePersonRequest {
    pub full_name: String,
    pub phone: String,
    pub currency: String,
    pub price: f64,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}
