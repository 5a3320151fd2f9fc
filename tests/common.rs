#![cfg(feature = "profile")]

mod support;

use csv::ReaderBuilder;
use freehub::{DataMessage, Messages};
use support::{BIG, FitBuilder};

/// Expected messages, one per row, in the layout of the SDK's CSV tool: the
/// message name and local slot, then a name, value and units per field.
const ACTIVITY: &str = "\
Data,0,file_id,type,4,,manufacturer,garmin,,garmin_product,edge810,,serial_number,3900000000,
Data,1,event,event,timer,,event_type,start,,timer_trigger,manual,
Data,2,record,timestamp,1000,s,position_lat,-7421,semicircles,altitude,105,m,heart_rate,121,bpm
Data,2,record,timestamp,1001,s,position_lat,-7420,semicircles,altitude,106,m
Data,3,device_info,device_index,1,,antplus_device_type,heart_rate,,source_type,antplus,,battery_status,ok,
Data,1,event,event,battery,,event_type,marker,,battery_level,3.9,V
Data,4,lap,sport,cycling,,total_strokes,2100,strokes
";

fn activity() -> Vec<u8> {
    FitBuilder::new()
        .definition(0, 0, &[(0, 1, 0x00), (1, 2, 0x84), (2, 2, 0x84), (3, 4, 0x8C)])
        .data(0, &[4, 1, 0, 0x1F, 0x06, 0x00, 0x47, 0x75, 0xE8])
        .definition(1, 21, &[(0, 1, 0x00), (1, 1, 0x00), (3, 4, 0x86)])
        .data(1, &[0, 0, 0, 0, 0, 0])
        .definition_with(
            2,
            BIG,
            20,
            &[(253, 4, 0x86), (0, 4, 0x85), (2, 2, 0x84), (3, 1, 0x02)],
            &[],
        )
        .data(2, &[0, 0, 0x03, 0xE8, 0xFF, 0xFF, 0xE3, 0x03, 0x0B, 0xD1, 121])
        .compressed(2, 1, &[0, 0, 0x03, 0xE9, 0xFF, 0xFF, 0xE3, 0x04, 0x0B, 0xD6, 0xFF])
        .definition(3, 23, &[(0, 1, 0x02), (1, 1, 0x02), (25, 1, 0x00), (11, 1, 0x02)])
        .data(3, &[1, 120, 1, 3])
        .data(1, &[11, 3, 0x3C, 0x0F, 0, 0])
        .definition(4, 19, &[(25, 1, 0x00), (10, 4, 0x86), (17, 1, 0x02)])
        .data(4, &[2, 0x34, 0x08, 0, 0, 88])
        .build()
}

#[test]
fn decode_slice_activity() {
    let data = activity();
    let mut validator = Validator::new(ACTIVITY);

    for message in freehub::avec::decode_slice(&data).unwrap() {
        validator.validate(&message);
    }

    validator.finish();
}

#[test]
fn decode_reader_activity() {
    let data = activity();
    let mut validator = Validator::new(ACTIVITY);

    for message in Messages::new(std::io::Cursor::new(data)).unwrap() {
        validator.validate(&message.unwrap());
    }

    validator.finish();
}

struct Validator(Vec<Vec<String>>);

impl Validator {
    fn new(expected: &str) -> Self {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_reader(expected.as_bytes());

        let expected = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();

        Self(expected)
    }

    fn validate(&mut self, message: &DataMessage) {
        assert!(!self.0.is_empty(), "unexpected message {}", message.name);

        let mut row = self.0.remove(0).into_iter();
        assert_eq!(row.next().unwrap(), "Data");
        assert_eq!(row.next().unwrap(), message.local.to_string());
        assert_eq!(row.next().unwrap(), message.name);

        let mut fields = message.fields.iter();
        while let Some(name) = row.next() {
            let field = fields
                .next()
                .unwrap_or_else(|| panic!("{} is missing {name}", message.name));

            assert_eq!(field.name, name);
            assert_eq!(field.value.to_string(), row.next().unwrap(), "{name}");
            assert_eq!(field.units, row.next().unwrap(), "{name}");
        }

        assert!(fields.next().is_none(), "{} has extra fields", message.name);
    }

    fn finish(self) {
        assert!(self.0.is_empty(), "{} messages missing", self.0.len());
    }
}
