use chrono::NaiveDate;

/// Fields written by a travel-booking submission.
///
/// `add_ons` holds the JSON text of the selected add-on list, as stored in
/// the `add_ons` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTravelBooking {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub passport_number: Option<String>,
    pub departure_country: String,
    pub destination_country: String,
    pub travel_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub travel_type: String,
    pub travelers: i32,
    pub travel_class: String,
    pub meal_preference: Option<String>,
    pub add_ons: String,
    pub payment_method: String,
    pub special_requests: Option<String>,
}
