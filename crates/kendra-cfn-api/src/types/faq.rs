//! FAQ enumerations. FAQs have no nested settings beyond an S3 location.

kendra_enum! {
    FaqFileFormat {
        Csv => "CSV",
        CsvWithHeader => "CSV_WITH_HEADER",
        Json => "JSON",
    }
}

kendra_enum! {
    FaqStatus {
        Creating => "CREATING",
        Updating => "UPDATING",
        Active => "ACTIVE",
        Deleting => "DELETING",
        Failed => "FAILED",
    }
}
