//! Destination address checks performed before a request is built.

use vracht_core::model::Party;
use vracht_core::ports::AddressError;

/// The only destination country the PostNL Shipping API integration accepts.
pub(crate) const SUPPORTED_COUNTRY: &str = "NL";

/// Validate that a destination has the fields PostNL requires.
///
/// Checks run in a fixed order so the reported error is deterministic:
/// country presence, country match, city, zip. The first failing check wins.
pub(crate) fn validate(recipient: &Party) -> Result<(), AddressError> {
    let country = recipient
        .country_code
        .as_deref()
        .filter(|code| !code.is_empty())
        .ok_or(AddressError::MissingCountry)?;

    if country != SUPPORTED_COUNTRY {
        return Err(AddressError::UnsupportedCountry(country.to_owned()));
    }

    if recipient.city.as_deref().is_none_or(str::is_empty) {
        return Err(AddressError::MissingCity);
    }

    if recipient.zip.as_deref().is_none_or(str::is_empty) {
        return Err(AddressError::MissingZip);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use vracht_core::model::Party;
    use vracht_core::ports::AddressError;

    use super::validate;

    fn dutch_recipient() -> Party {
        Party {
            name: String::from("NL Partner"),
            street: Some(String::from("Coolsingel 10")),
            city: Some(String::from("Rotterdam")),
            zip: Some(String::from("3011 AD")),
            country_code: Some(String::from("NL")),
            ..Party::default()
        }
    }

    #[test]
    fn accepts_a_complete_dutch_address() {
        assert!(validate(&dutch_recipient()).is_ok());
    }

    #[test]
    fn rejects_a_missing_country_first() {
        let mut recipient = dutch_recipient();
        recipient.country_code = None;
        recipient.city = None;
        recipient.zip = None;

        // Even with city and zip missing as well, the country check wins.
        assert!(matches!(
            validate(&recipient),
            Err(AddressError::MissingCountry)
        ));
    }

    #[test]
    fn rejects_a_non_dutch_destination() {
        let mut recipient = dutch_recipient();
        recipient.country_code = Some(String::from("BE"));
        recipient.city = None;

        assert!(matches!(
            validate(&recipient),
            Err(AddressError::UnsupportedCountry(code)) if code == "BE"
        ));
    }

    #[test]
    fn rejects_a_missing_city_before_a_missing_zip() {
        let mut recipient = dutch_recipient();
        recipient.city = Some(String::new());
        recipient.zip = None;

        assert!(matches!(validate(&recipient), Err(AddressError::MissingCity)));
    }

    #[test]
    fn rejects_a_missing_zip_last() {
        let mut recipient = dutch_recipient();
        recipient.zip = None;

        assert!(matches!(validate(&recipient), Err(AddressError::MissingZip)));
    }
}
