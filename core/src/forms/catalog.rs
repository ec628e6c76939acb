//! The four forms on the site, declared as data.

use crate::forms::schema::{Choice, FieldKind, FieldSpec, FormKind, FormSchema, YES_NO};
use crate::forms::values::FormValues;

const AGE_RANGES: &[Choice] = &[
    Choice::new("18-24", "18 - 24"),
    Choice::new("25-34", "25 - 34"),
    Choice::new("35-44", "35 - 44"),
    Choice::new("45+", "45 and above"),
];

const VOLUNTEER_AREAS: &[Choice] = &[
    Choice::new("registration", "Registration & Check-in"),
    Choice::new("logistics", "Logistics"),
    Choice::new("technical", "Technical Support"),
    Choice::new("hospitality", "Hospitality"),
    Choice::new("media", "Media & Content"),
];

const AVAILABILITY: &[Choice] = &[
    Choice::new("setup", "Setup day"),
    Choice::new("day1", "Day 1"),
    Choice::new("day2", "Day 2"),
];

const ORG_TYPES: &[Choice] = &[
    Choice::new("startup", "Startup"),
    Choice::new("corporate", "Corporate"),
    Choice::new("ngo", "NGO / Non-profit"),
    Choice::new("government", "Government"),
    Choice::new("academic", "Academic"),
];

const SPONSOR_TIERS: &[Choice] = &[
    Choice::new("platinum", "Platinum"),
    Choice::new("gold", "Gold"),
    Choice::new("silver", "Silver"),
    Choice::new("bronze", "Bronze"),
];

const SPONSOR_INTERESTS: &[Choice] = &[
    Choice::new("branding", "Brand visibility"),
    Choice::new("speaking", "Speaking slot"),
    Choice::new("exhibition", "Exhibition booth"),
    Choice::new("recruitment", "Talent recruitment"),
];

const INDUSTRIES: &[Choice] = &[
    Choice::new("fintech", "Fintech"),
    Choice::new("agritech", "Agritech"),
    Choice::new("edtech", "Edtech"),
    Choice::new("healthtech", "Healthtech"),
    Choice::new("creative", "Creative & Media"),
    Choice::new("other", "Other"),
];

const EXHIBITION_PACKAGES: &[Choice] = &[
    Choice::new("startup", "Startup Corner"),
    Choice::new("standard", "Standard Booth"),
    Choice::new("premium", "Premium Booth"),
];

const PARTICIPANT_CATEGORIES: &[Choice] = &[
    Choice::new("developer", "Developer"),
    Choice::new("designer", "Designer"),
    Choice::new("founder", "Founder"),
    Choice::new("student", "Student"),
    Choice::new("investor", "Investor"),
    Choice::new("researcher", "Researcher"),
    Choice::new("other", "Other"),
];

const TICKET_TYPES: &[Choice] = &[
    Choice::new("general", "General Admission"),
    Choice::new("student", "Student"),
    Choice::new("vip", "VIP"),
];

pub static VOLUNTEER: FormSchema = FormSchema {
    kind: FormKind::Volunteer,
    title: "Volunteer Application",
    submit_label: "Submit Application",
    success_message: "Thank you! Your volunteer application has been submitted. We'll contact you within 48 hours.",
    notice_duration_ms: 5000,
    fields: &[
        FieldSpec::text("fullName", "Full Name").required(),
        FieldSpec::new("ageRange", "Age Range", FieldKind::Select(AGE_RANGES)).required(),
        FieldSpec::email("email", "Email Address").required(),
        FieldSpec::tel("phone", "Phone Number").required(),
        FieldSpec::text("location", "Location").required(),
        FieldSpec::new(
            "volunteerArea",
            "Preferred Volunteer Area",
            FieldKind::Select(VOLUNTEER_AREAS),
        )
        .required(),
        FieldSpec::new("availability", "Availability", FieldKind::CheckboxGroup(AVAILABILITY)),
        FieldSpec::new("motivation", "Why do you want to volunteer?", FieldKind::TextArea)
            .required(),
        FieldSpec::new("available", "Available for the full event", FieldKind::Radio(YES_NO))
            .required(),
        FieldSpec::new("briefing", "Can attend the pre-event briefing", FieldKind::Radio(YES_NO))
            .required(),
        FieldSpec::new("terms", "I agree to the volunteer terms", FieldKind::Checkbox).required(),
    ],
};

pub static SPONSOR: FormSchema = FormSchema {
    kind: FormKind::Sponsor,
    title: "Sponsorship Application",
    submit_label: "Apply to Sponsor",
    success_message: "Thank you! Your sponsorship application has been submitted. Our partnerships team will contact you within 48 hours.",
    notice_duration_ms: 5000,
    fields: &[
        FieldSpec::text("orgName", "Organization Name").required(),
        FieldSpec::new("orgType", "Organization Type", FieldKind::Select(ORG_TYPES)).required(),
        FieldSpec::new("officeAddress", "Office Address", FieldKind::TextArea).required(),
        FieldSpec::text("contactName", "Contact Person").required(),
        FieldSpec::text("jobTitle", "Job Title").required(),
        FieldSpec::email("contactEmail", "Contact Email").required(),
        FieldSpec::tel("contactPhone", "Contact Phone").required(),
        FieldSpec::new("sponsorTier", "Sponsorship Tier", FieldKind::Select(SPONSOR_TIERS))
            .required(),
        FieldSpec::new(
            "interests",
            "Areas of Interest",
            FieldKind::CheckboxGroup(SPONSOR_INTERESTS),
        ),
        FieldSpec::new(
            "confirmation",
            "I confirm the information provided is accurate",
            FieldKind::Checkbox,
        )
        .required(),
    ],
};

pub static EXHIBITOR: FormSchema = FormSchema {
    kind: FormKind::Exhibitor,
    title: "Exhibitor Registration",
    submit_label: "Register to Exhibit",
    success_message: "Thank you! Your exhibition registration has been submitted. Our events team will contact you within 48 hours.",
    notice_duration_ms: 5000,
    fields: &[
        FieldSpec::text("businessName", "Business Name").required(),
        FieldSpec::new("industryCategory", "Industry Category", FieldKind::Select(INDUSTRIES))
            .required(),
        FieldSpec::new("businessDescription", "Business Description", FieldKind::TextArea)
            .required(),
        FieldSpec::text("contactPersonName", "Contact Person").required(),
        FieldSpec::email("contactEmail", "Contact Email").required(),
        FieldSpec::tel("contactPhone", "Contact Phone").required(),
        FieldSpec::new(
            "exhibitionPackage",
            "Exhibition Package",
            FieldKind::Select(EXHIBITION_PACKAGES),
        )
        .required(),
        FieldSpec::new("powerInternet", "Do you need power and internet?", FieldKind::Radio(YES_NO))
            .required(),
        FieldSpec::new(
            "complianceDeclaration",
            "My products comply with event guidelines",
            FieldKind::Checkbox,
        )
        .required(),
        FieldSpec::new("termsAgreement", "I agree to the exhibitor terms", FieldKind::Checkbox)
            .required(),
    ],
};

pub static REGISTRATION: FormSchema = FormSchema {
    kind: FormKind::Registration,
    title: "Attendee Registration",
    submit_label: "Register",
    success_message: "You're in! Check your inbox for your Ogbomoso Ignite ticket details.",
    notice_duration_ms: 7000,
    fields: &[
        FieldSpec::text("fullName", "Full Name").required(),
        FieldSpec::email("email", "Email Address").required(),
        FieldSpec::tel("phone", "Phone Number").required(),
        FieldSpec::text("organization", "Organization"),
        FieldSpec::new(
            "participantCategories",
            "Participant Categories",
            FieldKind::CheckboxGroup(PARTICIPANT_CATEGORIES),
        )
        .between(1, 3),
        FieldSpec::new("ticketType", "Ticket Type", FieldKind::Select(TICKET_TYPES)).required(),
        FieldSpec::new("terms", "I agree to the event code of conduct", FieldKind::Checkbox)
            .required(),
    ],
};

pub fn schema_for(kind: FormKind) -> &'static FormSchema {
    match kind {
        FormKind::Volunteer => &VOLUNTEER,
        FormKind::Sponsor => &SPONSOR,
        FormKind::Exhibitor => &EXHIBITOR,
        FormKind::Registration => &REGISTRATION,
    }
}

/// A complete, valid set of answers for `kind`.
pub fn sample_values(kind: FormKind) -> FormValues {
    let values = FormValues::new();
    match kind {
        FormKind::Volunteer => values
            .with_text("fullName", "Adebayo Ogunleye")
            .with_text("ageRange", "25-34")
            .with_text("email", "adebayo@example.com")
            .with_text("phone", "+2348012345678")
            .with_text("location", "Ogbomoso")
            .with_text("volunteerArea", "logistics")
            .with_list("availability", &["day1", "day2"])
            .with_text("motivation", "I want to help grow the local tech scene.")
            .with_text("available", "yes")
            .with_text("briefing", "yes")
            .with_text("terms", "on"),
        FormKind::Sponsor => values
            .with_text("orgName", "Savanna Labs")
            .with_text("orgType", "startup")
            .with_text("officeAddress", "12 Station Road, Ogbomoso")
            .with_text("contactName", "Funke Adeyemi")
            .with_text("jobTitle", "Head of Partnerships")
            .with_text("contactEmail", "funke@savannalabs.ng")
            .with_text("contactPhone", "+2348098765432")
            .with_text("sponsorTier", "gold")
            .with_list("interests", &["branding", "recruitment"])
            .with_text("confirmation", "on"),
        FormKind::Exhibitor => values
            .with_text("businessName", "Harmattan Robotics")
            .with_text("industryCategory", "agritech")
            .with_text("businessDescription", "Soil sensors for smallholder farms.")
            .with_text("contactPersonName", "Tunde Bakare")
            .with_text("contactEmail", "tunde@harmattan.io")
            .with_text("contactPhone", "+2347011122233")
            .with_text("exhibitionPackage", "standard")
            .with_text("powerInternet", "yes")
            .with_text("complianceDeclaration", "on")
            .with_text("termsAgreement", "on"),
        FormKind::Registration => values
            .with_text("fullName", "Kemi Alade")
            .with_text("email", "kemi@example.com")
            .with_text("phone", "+2348155566677")
            .with_list("participantCategories", &["developer", "founder"])
            .with_text("ticketType", "general")
            .with_text("terms", "on"),
    }
}
