mod common;

use common::{END_OF_TRACK, smf, vlq};
use pretty_assertions::assert_eq;
use smf_reader::prelude::*;

#[test]
fn tempo_and_end_of_track() {
    let track = [
        0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20, // set tempo 500_000
        0x00, 0xFF, 0x2F, 0x00, // end of track
    ];
    let bytes = smf(0, 96, &[&track]);

    let file = MidiFileData::parse(&bytes).unwrap();

    let header = file.header();
    assert_eq!(header.tag(), "MThd");
    assert_eq!(header.size(), 6);
    assert_eq!(header.format_type(), 0);
    assert_eq!(header.format(), Some(FormatType::SingleMultiChannel));
    assert_eq!(header.track_count(), 1);
    assert_eq!(header.time_division(), 96);
    assert_eq!(header.timing(), Ok(Timing::TicksPerQuarterNote(96)));

    assert_eq!(file.tracks().len(), 1);
    let track = &file.tracks()[0];
    assert_eq!(track.tag(), "MTrk");
    assert_eq!(track.size(), 11);
    assert_eq!(track.tempo(), 500_000);
    assert_eq!(track.ticks_duration(), 0);

    let events = track.events();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0].message(),
        &TrackMessage::Meta(MetaEvent::SetTempo(Tempo::new(500_000)))
    );
    assert_eq!(events[1].message(), &TrackMessage::Meta(MetaEvent::EndOfTrack));
    assert!(track.end_of_track_present());
}

#[test]
fn running_status_note_off() {
    let mut track = vec![0x00, 0x90, 60, 64, 0x00, 64, 0];
    track.extend(END_OF_TRACK);
    let bytes = smf(0, 480, &[&track]);

    let file = smf_reader::parse(&bytes).unwrap();
    let events = file.tracks()[0].events();

    assert_eq!(
        events[0].message().channel_voice().unwrap().event(),
        &VoiceEvent::NoteOn {
            note: 60,
            velocity: 64
        }
    );
    assert_eq!(
        events[1].message().channel_voice().unwrap().event(),
        &VoiceEvent::NoteOff {
            note: 64,
            velocity: 0
        }
    );
}

#[test]
fn delta_times_sum_to_duration() {
    let deltas = [0u32, 1, 127, 128, 480, 16_383, 16_384, 96, 0, 2_000_000];
    let mut track = Vec::new();
    for (i, delta) in deltas.iter().enumerate() {
        track.extend(vlq(*delta));
        if i == 0 {
            track.extend([0x91, 48, 100]);
        } else {
            // running status from here on
            track.extend([48 + i as u8, (i as u8) * 10]);
        }
    }
    track.extend(END_OF_TRACK);
    let bytes = smf(0, 96, &[&track]);

    let file = MidiFileData::parse(&bytes).unwrap();
    let track = file.track(0).unwrap();

    let total: u32 = track.events().iter().map(TrackEvent::delta_time).sum();
    assert_eq!(total, track.ticks_duration());
    assert_eq!(total, deltas.iter().sum::<u32>());

    let mut running = 0;
    for event in track.events() {
        running += event.delta_time();
        assert_eq!(event.absolute_time(), running);
    }

    assert!(
        track
            .events()
            .iter()
            .filter_map(|e| e.message().channel_voice())
            .all(|msg| msg.channel() == 1)
    );
}

#[test]
fn every_family_in_one_track() {
    let track = [
        0x00, 0xFF, 0x03, 0x05, b'P', b'i', b'a', b'n', b'o', // track name
        0x00, 0xFF, 0x58, 0x04, 0x03, 0x02, 0x18, 0x08, // 3/4
        0x00, 0xFF, 0x59, 0x02, 0xFF, 0x00, // F major
        0x00, 0xFF, 0x20, 0x01, 0x02, // channel prefix
        0x00, 0xFF, 0x54, 0x05, 0x60, 0x00, 0x00, 0x00, 0x00, // smpte offset, 30 fps
        0x00, 0xF0, 0x05, 0x7E, 0x7F, 0x09, 0x01, 0xF7, // GM on
        0x00, 0xB2, 0x07, 0x64, // volume
        0x00, 0xC2, 0x18, // program
        0x10, 0xE2, 0x00, 0x40, // pitch bend center
        0x10, 0xD2, 0x30, // channel pressure
        0x10, 0xA2, 0x3C, 0x20, // poly pressure
        0x00, 0xFF, 0x7F, 0x03, 0x00, 0x00, 0x41, // sequencer specific
        0x00, 0xFF, 0x60, 0x01, 0x00, // unknown meta
        0x00, 0xFF, 0x2F, 0x00,
    ];
    let bytes = smf(1, 480, &[&track]);
    let file = MidiFileData::parse(&bytes).unwrap();
    let track = &file.tracks()[0];
    assert_eq!(track.name(), Some("Piano"));
    assert_eq!(track.ticks_duration(), 0x30);

    let messages: Vec<&TrackMessage> = track.events().iter().map(TrackEvent::message).collect();
    assert_eq!(messages.len(), 14);

    assert_eq!(
        messages[1],
        &TrackMessage::Meta(MetaEvent::TimeSignature(TimeSignature {
            nn: 3,
            dd: 2,
            cc: 24,
            bb: 8
        }))
    );
    assert_eq!(
        messages[2],
        &TrackMessage::Meta(MetaEvent::KeySignature(KeySignature { sf: 0xFF, mi: 0 }))
    );
    assert_eq!(messages[3], &TrackMessage::Meta(MetaEvent::ChannelPrefix(2)));

    let TrackMessage::Meta(MetaEvent::SmpteOffset(offset)) = messages[4] else {
        panic!("expected a smpte offset");
    };
    assert_eq!(offset.fps(), Ok(SmpteFps::Thirty));

    assert_eq!(
        messages[5],
        &TrackMessage::SystemExclusive(SysexEvent::Message(vec![0x7E, 0x7F, 0x09, 0x01, 0xF7]))
    );

    let kinds: Vec<VoiceKind> = messages
        .iter()
        .filter_map(|m| m.channel_voice())
        .map(ChannelVoiceMessage::kind)
        .collect();
    assert_eq!(
        kinds,
        [
            VoiceKind::Controller,
            VoiceKind::ProgramChange,
            VoiceKind::PitchBend,
            VoiceKind::ChannelAftertouch,
            VoiceKind::NoteAftertouch,
        ]
    );

    let VoiceEvent::PitchBend(bend) = messages[8].channel_voice().unwrap().event() else {
        panic!("expected a pitch bend");
    };
    assert_eq!(bend.value(), 0.0);

    assert_eq!(
        messages[11],
        &TrackMessage::Meta(MetaEvent::SequencerSpecific(vec![0x00, 0x00, 0x41]))
    );
    assert_eq!(
        messages[12],
        &TrackMessage::Meta(MetaEvent::Unknown { meta_type: 0x60 })
    );
}

#[test]
fn running_status_resets_between_tracks() {
    let first = [0x00, 0x90, 60, 100, 0x00, 62, 100];
    let second = [0x00, 64, 100];
    let bytes = smf(1, 96, &[&first, &second]);

    let err = MidiFileData::parse(&bytes).unwrap_err();
    assert_eq!(
        err.parse_error(),
        Some(&ParseError::Track(TrackError::RunningStatusUninitialized))
    );
    // header (14) + first track (8 + 7) + second track header (8) + delta + status
    assert_eq!(err.position(), 14 + 15 + 8 + 2);
}

#[test]
fn tempo_is_per_track() {
    let first = [0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20];
    let second = END_OF_TRACK;
    let bytes = smf(1, 96, &[&first, &second]);

    let file = MidiFileData::parse(&bytes).unwrap();
    assert_eq!(file.tracks()[0].tempo(), 500_000);
    assert_eq!(file.tracks()[1].tempo(), 0);
}

#[test]
fn track_count_is_not_enforced() {
    let mut bytes = common::header(1, 5, 96);
    bytes.extend(common::chunk(b"MTrk", &END_OF_TRACK));
    bytes.extend(common::chunk(b"MTrk", &END_OF_TRACK));

    let file = MidiFileData::parse(&bytes).unwrap();
    assert_eq!(file.header().track_count(), 5);
    assert_eq!(file.tracks().len(), 2);

    let bytes = common::header(0, 1, 96);
    let file = MidiFileData::parse(&bytes).unwrap();
    assert!(file.tracks().is_empty());
}

#[test]
fn declared_track_count_does_not_reserve_tracks() {
    let bytes = common::header(1, u16::MAX, 96);
    let (header, tracks) = MidiFileData::parse(&bytes).unwrap().into_parts();
    assert_eq!(header.track_count(), u16::MAX);
    assert!(tracks.is_empty());
    assert_eq!(tracks.capacity(), 0);
}

#[test]
fn smpte_division() {
    let bytes = smf(0, 0xE728, &[&END_OF_TRACK]);
    let file = MidiFileData::parse(&bytes).unwrap();
    let Ok(Timing::Smpte(smpte)) = file.header().timing() else {
        panic!("expected smpte timing");
    };
    assert_eq!(smpte.fps(), SmpteFps::TwentyFive);
    assert_eq!(smpte.ticks_per_frame(), 40);
}

#[test]
fn long_header_is_accepted() {
    let mut bytes = common::chunk(b"MThd", &[0, 2, 0, 1, 0, 96, 0xAA, 0xBB]);
    bytes.extend(common::chunk(b"MTrk", &END_OF_TRACK));

    let file = MidiFileData::parse(&bytes).unwrap();
    assert_eq!(file.header().size(), 8);
    assert_eq!(file.header().format(), Some(FormatType::SequentiallyIndependent));
    assert_eq!(file.tracks().len(), 1);
}

#[test]
fn parsed_files_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MidiFileData>();

    let bytes = smf(0, 96, &[&END_OF_TRACK]);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let bytes = bytes.clone();
            std::thread::spawn(move || MidiFileData::parse(&bytes).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().tracks().len(), 1);
    }
}
