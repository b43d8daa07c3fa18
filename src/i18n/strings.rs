/// All localized user-facing strings for a language.
///
/// Strings are stored raw; the presentation layer decides how to render
/// them. Placeholders such as `{usage}` are substituted with
/// `str::replace` by the module that owns the string.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Record Sentinels ====================
    /// Sentinel for a field the resolution could not determine
    pub not_found: &'static str,

    /// Sentinel for a field the source simply doesn't carry
    pub not_available: &'static str,

    /// Name shown for a record with no recognized medicine
    pub unknown_medicine: &'static str,

    /// Sentinel used when the extraction endpoint returns unstructured text
    pub info_not_available: &'static str,

    /// Sentinel for the warnings field of a degraded extraction result
    pub no_warnings_found: &'static str,

    // ==================== Field Labels ====================
    /// Label preceding the medicine name in narration and rendering
    pub name_label: &'static str,

    /// Label for the usage field
    pub usage_label: &'static str,

    /// Label for the warnings field
    pub warnings_label: &'static str,

    /// Label for the dosage field
    pub dosage_label: &'static str,

    /// Label for the side-effects field
    pub side_effects_label: &'static str,

    /// Label for the extracted expiry date
    pub expiry_label: &'static str,

    /// Label preceding the scan timestamp
    pub scanned_at_label: &'static str,

    // ==================== Service Error Messages ====================
    /// Prefix for every remote-resolution failure message
    pub error_processing: &'static str,

    /// Prefix for an HTTP error status from the scan backend
    /// (followed by the status code)
    pub server_error_prefix: &'static str,

    /// Message when the scan backend never responds (timeout included)
    pub no_server_response: &'static str,

    /// Message when a response arrives but its payload cannot be used
    pub invalid_server_payload: &'static str,

    /// Message when the caller supplies no image data or empty text
    pub empty_input: &'static str,

    // ==================== Permission Messages ====================
    /// Shown when the camera permission was denied
    pub camera_permission_needed: &'static str,

    /// Shown when a reminder is requested without the notification grant
    pub notification_permission_needed: &'static str,

    // ==================== Reminder Messages ====================
    /// Shown when the reminder minute count is not a positive number
    pub invalid_minutes: &'static str,

    /// Confirmation after a reminder is scheduled
    pub reminder_set: &'static str,

    /// Notification title prefix (followed by the medicine name)
    pub reminder_title_prefix: &'static str,

    /// Notification body. Placeholders: {usage}
    pub reminder_body: &'static str,
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    // Record sentinels
    not_found: "Not found",
    not_available: "Not available",
    unknown_medicine: "Unknown Medicine",
    info_not_available: "Information not available",
    no_warnings_found: "No specific warnings found",

    // Field labels
    name_label: "Medicine Name:",
    usage_label: "Usage:",
    warnings_label: "Warnings:",
    dosage_label: "Dosage:",
    side_effects_label: "Side Effects:",
    expiry_label: "Expiry Date:",
    scanned_at_label: "Scanned at:",

    // Service errors
    error_processing: "Error processing image. ",
    server_error_prefix: "Server error: ",
    no_server_response: "No response from server. Please check if the server is running.",
    invalid_server_payload: "Invalid response data from server",
    empty_input: "No image data provided",

    // Permissions
    camera_permission_needed:
        "Unable to access camera. Please ensure you have granted camera permissions.",
    notification_permission_needed: "Please allow notifications to receive reminders.",

    // Reminders
    invalid_minutes: "Please enter a valid number of minutes.",
    reminder_set: "Reminder set! You will receive a notification.",
    reminder_title_prefix: "Medicine Reminder: ",
    reminder_body: "It's time to take your medicine. Usage: {usage}",
};

// ==================== Hindi Strings ====================

/// Hindi language strings
pub const HINDI_STRINGS: LanguageStrings = LanguageStrings {
    // Record sentinels
    not_found: "नहीं मिला",
    not_available: "उपलब्ध नहीं",
    unknown_medicine: "अज्ञात दवा",
    info_not_available: "जानकारी उपलब्ध नहीं",
    no_warnings_found: "कोई विशिष्ट चेतावनी नहीं मिली",

    // Field labels
    name_label: "दवा का नाम:",
    usage_label: "उपयोग:",
    warnings_label: "चेतावनी:",
    dosage_label: "खुराक:",
    side_effects_label: "दुष्प्रभाव:",
    expiry_label: "समाप्ति तिथि:",
    scanned_at_label: "पर स्कैन किया गया:",

    // Service errors
    error_processing: "छवि संसाधित करने में त्रुटि। ",
    server_error_prefix: "सर्वर त्रुटि: ",
    no_server_response: "सर्वर से कोई प्रतिक्रिया नहीं। कृपया जांचें कि सर्वर चल रहा है या नहीं।",
    invalid_server_payload: "सर्वर से अमान्य प्रतिक्रिया डेटा",
    empty_input: "कोई छवि डेटा प्रदान नहीं किया गया",

    // Permissions
    camera_permission_needed:
        "कैमरा एक्सेस नहीं कर पा रहे। कृपया सुनिश्चित करें कि आपने कैमरा अनुमतियां दी हैं।",
    notification_permission_needed: "अनुस्मारक प्राप्त करने के लिए कृपया सूचनाओं की अनुमति दें।",

    // Reminders
    invalid_minutes: "कृपया मिनटों की एक मान्य संख्या दर्ज करें।",
    reminder_set: "अनुस्मारक सेट! आपको एक सूचना मिलेगी।",
    reminder_title_prefix: "दवा अनुस्मारक: ",
    reminder_body: "आपकी दवा लेने का समय हो गया है। उपयोग: {usage}",
};
