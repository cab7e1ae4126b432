//! Fixed operational constants.
//!
//! These values are baked into the refresh procedure: the administrative API
//! port, the service and locator identity, the locator build inputs, and the
//! threshold overrides applied to each freshly generated `.loc` file.

/// Port of the ArcGIS Server administrative API on each target server.
pub const ADMIN_PORT: u16 = 6080;

/// Token lifetime requested from `generateToken`, in minutes.
pub const TOKEN_EXPIRATION_MINUTES: u32 = 60;

/// The geocode service toggled around each refresh, as
/// `FolderName/ServiceName.ServiceType`.
pub const GEOCODE_SERVICE: &str = "geocode/ACT_Address_Locator.GeocodeServer";

/// Base name of the locator file set (`.loc`, `.loc.xml`, `.lox`).
pub const LOCATOR_NAME: &str = "ACT_Address_Locator";

/// Name of the geodatabase directory, both at the shared update location and
/// in each server's output directory.
pub const GDB_NAME: &str = "Geocode.gdb";

/// Environment name that suppresses the service stop/start calls while still
/// rebuilding data.
pub const OPTIMIZER_ENVIRONMENT: &str = "optimizer";

/// Address locator style passed to the build tool.
pub const LOCATOR_STYLE: &str = "US Address - Single House Subaddress";

/// Reference table inside the geodatabase the locator is built from.
pub const REFERENCE_TABLE: &str = "Address_Geocodes/Geocode";

/// Role of the reference table in the locator style.
pub const REFERENCE_ROLE: &str = "Primary Table";

/// Mapping of locator style fields to reference-table fields.
pub const FIELD_MAP: &str = "'Feature ID' OBJECTID VISIBLE NONE;\
'House Number Prefix' <None> VISIBLE NONE;\
'*House Number' STREET_NUMBER VISIBLE NONE;\
'House Number Suffix' <None> VISIBLE NONE;\
'Side' <None> VISIBLE NONE;\
'Prefix Direction' <None> VISIBLE NONE;\
'Prefix Type' <None> VISIBLE NONE;\
'*Street Name' STREET_NAME VISIBLE NONE;\
'Suffix Type' STREET_TYPE VISIBLE NONE;\
'Suffix Direction' <None> VISIBLE NONE;\
'Building Type' <None> VISIBLE NONE;\
'Building Unit' <None> VISIBLE NONE;\
'SubAddr Type' SUBADDTYPE VISIBLE NONE;\
'SubAddr Unit' DOOR_NO VISIBLE NONE;\
'City or Place' DIVISION VISIBLE NONE;\
'ZIP Code' <None> VISIBLE NONE;\
'State' <None> VISIBLE NONE;\
'Street ID' <None> VISIBLE NONE;\
'Display X' <None> VISIBLE NONE;\
'Display Y' <None> VISIBLE NONE;\
'Min X value for extent' <None> VISIBLE NONE;\
'Max X value for extent' <None> VISIBLE NONE;\
'Min Y value for extent' <None> VISIBLE NONE;\
'Max Y value for extent' <None> VISIBLE NONE;\
'Additional Field' <None> VISIBLE NONE;\
'Altname JoinID' <None> VISIBLE NONE";

/// Threshold overrides applied to the generated `.loc` file, as literal
/// before/after pairs. The build tool bakes in defaults that are too strict
/// for suggest-style lookups against this dataset.
pub const TUNING_OVERRIDES: [(&str, &str); 4] = [
    ("MinimumMatchScore = 85", "MinimumMatchScore = 15"),
    ("MinimumCandidateScore = 75", "MinimumCandidateScore = 15"),
    ("SpellingSensitivity = 80", "SpellingSensitivity = 15"),
    ("MaxSuggestCandidates = 10", "MaxSuggestCandidates = 1"),
];
