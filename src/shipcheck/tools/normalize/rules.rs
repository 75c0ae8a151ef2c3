//! Authored canonicalization rule tables.
//!
//! Both tables are ordered lists evaluated top to bottom; evaluation order is
//! load-bearing (specific overrides must win before generic fallbacks would
//! miscategorize a label) and must not be reshaped into a map.

/// Specific override table: full-string patterns (matched case-insensitively)
/// mapping known-irregular spellings to one canonical spelling each. Authored
/// from inspection of real vessel exports. First match wins.
pub(super) const SPECIFIC_RULES: &[(&str, &str)] = &[
    // Provision cranes
    ("Provision CraneA-?P", "Provision Crane A-P"),
    ("Provision CraneAft-?Port", "Provision Crane A-P"),
    ("Provision CraneF-?P", "Provision Crane F-P"),
    ("Provision CraneF-?S", "Provision Crane F-S"),
    ("Provision CraneFwd-?P", "Provision Crane F-P"),
    ("Provision CraneFwd-?Port", "Provision Crane F-P"),
    ("Provision CraneFwd-?Stbd", "Provision Crane F-S"),
    ("Provision Crane F-S", "Provision Crane F-S"),
    ("Provision Crane A-P", "Provision Crane A-P"),
    ("Provision Crane F-P", "Provision Crane F-P"),
    ("Provision CraneP1", "Provision Crane P1"),
    ("Provision CranePort1", "Provision Crane P1"),
    ("Provision CraneS1", "Provision Crane S1"),
    ("Provision CraneStarboard1", "Provision Crane S1"),
    // Liferaft/rescue davits
    ("Liferaft/Rescue Boat DavitS", "Liferaft/Rescue Boat Davit S"),
    ("Liferaft/Rescue Boat DavitStarboard", "Liferaft/Rescue Boat Davit S"),
    // Rescue boat
    ("Rescue BoatS", "Rescue Boat S"),
    ("Rescue BoatStarboard", "Rescue Boat S"),
    // Chain locker
    ("Chain LockerP1", "Chain Locker P1"),
    ("Chain LockerPort1", "Chain Locker P1"),
    ("Chain LockerS1", "Chain Locker S1"),
    ("Chain LockerStarboard1", "Chain Locker S1"),
    // Combined windlass mooring winch
    ("Combined Windlass Mooring WinchF1", "Combined Windlass Mooring Winch F1"),
    ("Combined Windlass Mooring WinchF2", "Combined Windlass Mooring Winch F2"),
    ("Combined Windlass Mooring WinchForward1", "Combined Windlass Mooring Winch F1"),
    ("Combined Windlass Mooring WinchForward2", "Combined Windlass Mooring Winch F2"),
    // Mooring winch
    ("Mooring WinchA1", "Mooring Winch A1"),
    ("Mooring WinchA2", "Mooring Winch A2"),
    ("Mooring WinchAft1", "Mooring Winch A1"),
    ("Mooring WinchAft2", "Mooring Winch A2"),
    // Muster station
    ("Muster StationA1", "Muster Station A1"),
    ("Muster StationAft1", "Muster Station A1"),
    // Accommodation ladder
    ("Accommodation LadderP1", "Accommodation Ladder P1"),
    ("Accommodation LadderPort1", "Accommodation Ladder P1"),
    ("Accommodation LadderS1", "Accommodation Ladder S1"),
    ("Accommodation LadderStarboard1", "Accommodation Ladder S1"),
    // Anchor chain cable
    ("Anchor Chain CableP1", "Anchor Chain Cable P1"),
    ("Anchor Chain CablePort1", "Anchor Chain Cable P1"),
    ("Anchor Chain CableS1", "Anchor Chain Cable S1"),
    ("Anchor Chain CableStarboard1", "Anchor Chain Cable S1"),
    // Anchor
    ("AnchorP1", "Anchor P1"),
    ("AnchorPort1", "Anchor P1"),
    ("AnchorS1", "Anchor S1"),
    ("AnchorStarboard1", "Anchor S1"),
    // Pilot combination ladder
    ("Pilot Combination LadderP1", "Pilot Combination Ladder P1"),
    ("Pilot Combination LadderPort1", "Pilot Combination Ladder P1"),
    ("Pilot Combination LadderS1", "Pilot Combination Ladder S1"),
    ("Pilot Combination LadderStarboard1", "Pilot Combination Ladder S1"),
    // Bunker davit
    ("Bunker DavitP1", "Bunker Davit P1"),
    ("Bunker DavitPort1", "Bunker Davit P1"),
    ("Bunker DavitS1", "Bunker Davit S1"),
    ("Bunker DavitStarboard1", "Bunker Davit S1"),
    // Combined windlass mooring winch, sided
    ("Combined Windlass Mooring WinchP1", "Combined Windlass Mooring Winch P1"),
    ("Combined Windlass Mooring WinchPort1", "Combined Windlass Mooring Winch P1"),
    ("Combined Windlass Mooring WinchS1", "Combined Windlass Mooring Winch S1"),
    ("Combined Windlass Mooring WinchStarboard1", "Combined Windlass Mooring Winch S1"),
    // Pilot ladder davit
    ("Pilot Ladder DavitP1", "Pilot Ladder Davit P1"),
    ("Pilot Ladder DavitPort1", "Pilot Ladder Davit P1"),
    ("Pilot Ladder DavitS2", "Pilot Ladder Davit S1"),
    ("Pilot Ladder DavitStarboard2", "Pilot Ladder Davit S1"),
    // Seaway equipment
    ("Seaway EquipmentP1", "Seaway Equipment P1"),
    ("Seaway EquipmentPort1", "Seaway Equipment P1"),
    ("Seaway EquipmentS1", "Seaway Equipment S1"),
    ("Seaway EquipmentStarboard1", "Seaway Equipment S1"),
    // Lifeboat
    ("LifeboatA1", "Lifeboat A1"),
    ("LifeboatAft1", "Lifeboat A1"),
    // Liferaft embarkation ladder
    ("Liferaft Embarkation LadderF1", "Liferaft Embarkation Ladder F1"),
    ("Liferaft Embarkation LadderForward1", "Liferaft Embarkation Ladder F1"),
    ("Liferaft Embarkation LadderP1", "Liferaft Embarkation Ladder P1"),
    ("Liferaft Embarkation LadderPort1", "Liferaft Embarkation Ladder P1"),
    ("Liferaft Embarkation LadderS1", "Liferaft Embarkation Ladder S1"),
    ("Liferaft Embarkation LadderStarboard1", "Liferaft Embarkation Ladder S1"),
    // Liferaft
    ("LiferaftP1", "Liferaft P1"),
    ("LiferaftPort1", "Liferaft P1"),
    ("LiferaftP2", "Liferaft P2"),
    ("LiferaftPort2", "Liferaft P2"),
    ("LiferaftS1", "Liferaft S1"),
    ("LiferaftStarboard1", "Liferaft S1"),
    ("LiferaftS2", "Liferaft S2"),
    ("LiferaftStarboard2", "Liferaft S2"),
    // Mooring winch, aft and forward numbering
    ("Mooring WinchA3", "Mooring Winch A3"),
    ("Mooring WinchAft3", "Mooring Winch A3"),
    ("Mooring WinchA4", "Mooring Winch A4"),
    ("Mooring WinchAft4", "Mooring Winch A4"),
    ("Mooring WinchF1", "Mooring Winch F1"),
    ("Mooring WinchForward1", "Mooring Winch F1"),
    ("Mooring WinchF2", "Mooring Winch F2"),
    ("Mooring WinchForward2", "Mooring Winch F2"),
    // Pilot ladder
    ("Pilot LadderP1", "Pilot Ladder P1"),
    ("Pilot LadderPort1", "Pilot Ladder P1"),
    ("Pilot LadderS1", "Pilot Ladder S1"),
    ("Pilot LadderStarboard1", "Pilot Ladder S1"),
    // Rescue boat, port
    ("Rescue BoatP1", "Rescue Boat P1"),
    ("Rescue BoatPort1", "Rescue Boat P1"),
    // Combined mooring winch hydraulic unit
    ("Combined Mooring Winch Hydraulic UnitF1", "Combined Mooring Winch Hydraulic Unit F1"),
    ("Combined Mooring Winch Hydraulic UnitForward1", "Combined Mooring Winch Hydraulic Unit F1"),
    // Emergency towing system
    ("Emergency Towing SystemA1", "Emergency Towing System A1"),
    ("Emergency Towing SystemAft1", "Emergency Towing System A1"),
    ("Emergency Towing SystemF1", "Emergency Towing System F1"),
    ("Emergency Towing SystemForward1", "Emergency Towing System F1"),
    // Liferaft 15: pre-numbered labels, side glued to the number
    ("Liferaft 15P1", "Liferaft 15P1"),
    ("Liferaft 15P2", "Liferaft 15P2"),
    ("Liferaft 15Port1", "Liferaft 15P1"),
    ("Liferaft 15Port2", "Liferaft 15P2"),
    // Liferaft 6PF
    ("Liferaft 6PF-P1", "Liferaft 6PF-P1"),
    ("Liferaft 6PFwd-Port1", "Liferaft 6PF-P1"),
    // Liferaft embarkation ladder, forward-sided
    ("Liferaft Embarkation LadderF-P1", "Liferaft Embarkation Ladder F-P1"),
    ("Liferaft Embarkation LadderF-S1", "Liferaft Embarkation Ladder F-S1"),
    ("Liferaft Embarkation LadderFwd-Port1", "Liferaft Embarkation Ladder F-P1"),
    ("Liferaft Embarkation LadderFwd-Stbd1", "Liferaft Embarkation Ladder F-S1"),
    // Mooring winch hydraulic unit
    ("Mooring Winch Hydraulic UnitA1", "Mooring Winch Hydraulic Unit A1"),
    ("Mooring Winch Hydraulic UnitAft1", "Mooring Winch Hydraulic Unit A1"),
    // Rescue boat, numbered starboard
    ("Rescue BoatS1", "Rescue Boat S1"),
    ("Rescue BoatStarboard1", "Rescue Boat S1"),
    // SART
    ("SARTP1", "SART P1"),
    ("SARTPort1", "SART P1"),
    ("SARTS1", "SART S1"),
    ("SARTStarboard1", "SART S1"),
    // Liferaft 15P, port-numbered
    ("Liferaft 15PPort1", "Liferaft 15PP1"),
    ("Liferaft 15PPort2", "Liferaft 15PP2"),
    // ICCP
    ("ICCPA1", "ICCP A1"),
    ("ICCPAft1", "ICCP A1"),
    ("ICCPF1", "ICCP F1"),
    ("ICCPForward1", "ICCP F1"),
    // Slewing fuel hose crane
    ("Slewing Fuel Hose CraneP1", "Slewing Fuel Hose Crane P1"),
    ("Slewing Fuel Hose CranePort1", "Slewing Fuel Hose Crane P1"),
    ("Slewing Fuel Hose CraneS1", "Slewing Fuel Hose Crane S1"),
    ("Slewing Fuel Hose CraneStarboard1", "Slewing Fuel Hose Crane S1"),
    // Combined windlass mooring winch, forward-sided
    ("Combined Windlass Mooring WinchF-P1", "Combined Windlass Mooring Winch F-P1"),
    ("Combined Windlass Mooring WinchF-S1", "Combined Windlass Mooring Winch F-S1"),
    ("Combined Windlass Mooring WinchFwd-Port1", "Combined Windlass Mooring Winch F-P1"),
    ("Combined Windlass Mooring WinchFwd-Stbd1", "Combined Windlass Mooring Winch F-S1"),
    // Lifeboat davit
    ("Lifeboat DavitP1", "Lifeboat Davit P1"),
    ("Lifeboat DavitPort1", "Lifeboat Davit P1"),
    // Lifeboat, port
    ("LifeboatP1", "Lifeboat P1"),
    ("LifeboatPort1", "Lifeboat P1"),
    // Liferaft embarkation ladder, second pair
    ("Liferaft Embarkation LadderP2", "Liferaft Embarkation Ladder P2"),
    ("Liferaft Embarkation LadderPort2", "Liferaft Embarkation Ladder P2"),
    ("Liferaft Embarkation LadderS2", "Liferaft Embarkation Ladder S2"),
    ("Liferaft Embarkation LadderStarboard2", "Liferaft Embarkation Ladder S2"),
    // Liferaft/rescue boat davit, numbered
    ("Liferaft/Rescue Boat DavitS1", "Liferaft/Rescue Boat Davit S1"),
    ("Liferaft/Rescue Boat DavitStarboard1", "Liferaft/Rescue Boat Davit S1"),
    // Mooring winch, centre
    ("Mooring WinchC1", "Mooring Winch C1"),
    ("Mooring WinchCentre1", "Mooring Winch C1"),
    // Hatch covers, aft
    ("Hatch CoverA1", "Hatch Cover A1"),
    ("Hatch CoverA2", "Hatch Cover A2"),
    ("Hatch CoverA3", "Hatch Cover A3"),
    ("Hatch CoverA4", "Hatch Cover A4"),
    ("Hatch CoverA5", "Hatch Cover A5"),
    ("Hatch CoverA6", "Hatch Cover A6"),
    ("Hatch CoverA7", "Hatch Cover A7"),
    ("Hatch CoverAft1", "Hatch Cover A1"),
    ("Hatch CoverAft2", "Hatch Cover A2"),
    ("Hatch CoverAft3", "Hatch Cover A3"),
    ("Hatch CoverAft4", "Hatch Cover A4"),
    ("Hatch CoverAft5", "Hatch Cover A5"),
    ("Hatch CoverAft6", "Hatch Cover A6"),
    ("Hatch CoverAft7", "Hatch Cover A7"),
    // Hatch covers, centre
    ("Hatch CoverC1", "Hatch Cover C1"),
    ("Hatch CoverC2", "Hatch Cover C2"),
    ("Hatch CoverCentre1", "Hatch Cover C1"),
    ("Hatch CoverCentre2", "Hatch Cover C2"),
    // Hatch covers, forward
    ("Hatch CoverF1", "Hatch Cover F1"),
    ("Hatch CoverF2", "Hatch Cover F2"),
    ("Hatch CoverF3", "Hatch Cover F3"),
    ("Hatch CoverF4", "Hatch Cover F4"),
    ("Hatch CoverF5", "Hatch Cover F5"),
    ("Hatch CoverF6", "Hatch Cover F6"),
    ("Hatch CoverF7", "Hatch Cover F7"),
    ("Hatch CoverForward1", "Hatch Cover F1"),
    ("Hatch CoverForward2", "Hatch Cover F2"),
    ("Hatch CoverForward3", "Hatch Cover F3"),
    ("Hatch CoverForward4", "Hatch Cover F4"),
    ("Hatch CoverForward5", "Hatch Cover F5"),
    ("Hatch CoverForward6", "Hatch Cover F6"),
    ("Hatch CoverForward7", "Hatch Cover F7"),
    // Mooring winch, second centre
    ("Mooring WinchC2", "Mooring Winch C2"),
    ("Mooring WinchCentre2", "Mooring Winch C2"),
    // Mooring winch, port numbering
    ("Mooring WinchP1", "Mooring Winch P1"),
    ("Mooring WinchP2", "Mooring Winch P2"),
    ("Mooring WinchP3", "Mooring Winch P3"),
    ("Mooring WinchPort1", "Mooring Winch P1"),
    ("Mooring WinchPort2", "Mooring Winch P2"),
    ("Mooring WinchPort3", "Mooring Winch P3"),
    // Mooring winch, starboard numbering
    ("Mooring WinchS1", "Mooring Winch S1"),
    ("Mooring WinchS2", "Mooring Winch S2"),
    ("Mooring WinchStarboard1", "Mooring Winch S1"),
    ("Mooring WinchStarboard2", "Mooring Winch S2"),
    // Lifeboat/rescue boat
    ("Lifeboat/Rescue BoatS1", "Lifeboat/Rescue Boat S1"),
    ("Lifeboat/Rescue BoatStarboard1", "Lifeboat/Rescue Boat S1"),
    // Liferaft, forward
    ("LiferaftF1", "Liferaft F1"),
    ("LiferaftForward1", "Liferaft F1"),
    // Muster station, sided
    ("Muster StationP1", "Muster Station P1"),
    ("Muster StationPort1", "Muster Station P1"),
    ("Muster StationS1", "Muster Station S1"),
    ("Muster StationStarboard1", "Muster Station S1"),
    // Pilot combination ladder, second port
    ("Pilot Combination LadderP2", "Pilot Combination Ladder P2"),
    ("Pilot Combination LadderPort2", "Pilot Combination Ladder P2"),
    // Liferaft, forward port/starboard
    ("LiferaftFP", "Liferaft FP"),
    ("LiferaftFS", "Liferaft FS"),
    ("LiferaftFwd-P", "Liferaft FP"),
    ("LiferaftFwdS", "Liferaft FS"),
    // Lifeboat davit, starboard
    ("Lifeboat DavitS1", "Lifeboat Davit S1"),
    ("Lifeboat DavitStarboard1", "Lifeboat Davit S1"),
    // Lifeboat/rescue boat, port
    ("Lifeboat/Rescue BoatP1", "Lifeboat/Rescue Boat P1"),
    ("Lifeboat/Rescue BoatPort1", "Lifeboat/Rescue Boat P1"),
    // Lifeboat, starboard
    ("LifeboatS1", "Lifeboat S1"),
    ("LifeboatStarboard1", "Lifeboat S1"),
    // Liferaft 16 person
    ("Liferaft 16 PersonP1", "Liferaft 16 Person P1"),
    ("Liferaft 16 PersonP2", "Liferaft 16 Person P2"),
    ("Liferaft 16 PersonPort1", "Liferaft 16 Person P1"),
    ("Liferaft 16 PersonPort2", "Liferaft 16 Person P2"),
    ("Liferaft 16 PersonS1", "Liferaft 16 Person S1"),
    ("Liferaft 16 PersonS2", "Liferaft 16 Person S2"),
    ("Liferaft 16 PersonStarboard1", "Liferaft 16 Person S1"),
    ("Liferaft 16 PersonStarboard2", "Liferaft 16 Person S2"),
    // Liferaft 6 person, forward port
    ("Liferaft 6 PersonF-P1", "Liferaft 6 Person F-P1"),
    ("Liferaft 6 PersonFwd-Port1", "Liferaft 6 Person F-P1"),
    // Liferaft/rescue boat davit, port
    ("Liferaft/Rescue Boat DavitP1", "Liferaft/Rescue Boat Davit P1"),
    ("Liferaft/Rescue Boat DavitPort1", "Liferaft/Rescue Boat Davit P1"),
    // Mooring winch, middle numbering
    ("Mooring WinchM1", "Mooring Winch M1"),
    ("Mooring WinchM2", "Mooring Winch M2"),
    ("Mooring WinchM3", "Mooring Winch M3"),
    ("Mooring WinchM4", "Mooring Winch M4"),
    ("Mooring WinchM5", "Mooring Winch M5"),
    ("Mooring WinchM6", "Mooring Winch M6"),
    ("Mooring WinchMiddle1", "Mooring Winch M1"),
    ("Mooring WinchMiddle2", "Mooring Winch M2"),
    ("Mooring WinchMiddle3", "Mooring Winch M3"),
    ("Mooring WinchMiddle4", "Mooring Winch M4"),
    ("Mooring WinchMiddle5", "Mooring Winch M5"),
    ("Mooring WinchMiddle6", "Mooring Winch M6"),
    // Liferaft/rescue boat davit, second starboard
    ("Liferaft/Rescue Boat DavitS2", "Liferaft/Rescue Boat Davit S2"),
    ("Liferaft/Rescue Boat DavitStarboard2", "Liferaft/Rescue Boat Davit S2"),
    // Lifeboat/rescue boat davit
    ("Lifeboat/Rescue Boat DavitS1", "Lifeboat/Rescue Boat Davit S1"),
    ("Lifeboat/Rescue Boat DavitStarboard1", "Lifeboat/Rescue Boat Davit S1"),
    // Liferaft embarkation ladder, third pair
    ("Liferaft Embarkation LadderP3", "Liferaft Embarkation Ladder P3"),
    ("Liferaft Embarkation LadderPort3", "Liferaft Embarkation Ladder P3"),
    ("Liferaft Embarkation LadderS3", "Liferaft Embarkation Ladder S3"),
    ("Liferaft Embarkation LadderStarboard3", "Liferaft Embarkation Ladder S3"),
    // Liferaft 6 person, forward
    ("Liferaft 6 PersonF1", "Liferaft 6 Person F1"),
    ("Liferaft 6 PersonForward1", "Liferaft 6 Person F1"),
    // Mooring winch, aft-side combinations
    ("Mooring WinchA-P1", "Mooring Winch A-P1"),
    ("Mooring WinchA-P2", "Mooring Winch A-P2"),
    ("Mooring WinchA-S1", "Mooring Winch A-S1"),
    ("Mooring WinchA-S2", "Mooring Winch A-S2"),
    ("Mooring WinchAft-Port1", "Mooring Winch A-P1"),
    ("Mooring WinchAft-Port2", "Mooring Winch A-P2"),
    ("Mooring WinchAft-Stbd1", "Mooring Winch A-S1"),
    ("Mooring WinchAft-Stbd2", "Mooring Winch A-S2"),
    // Mooring winch, forward-side combinations
    ("Mooring WinchF-P1", "Mooring Winch F-P1"),
    ("Mooring WinchF-S1", "Mooring Winch F-S1"),
    ("Mooring WinchFwd-Port1", "Mooring Winch F-P1"),
    ("Mooring WinchFwd-Stbd1", "Mooring Winch F-S1"),
    // Combined mooring winch hydraulic unit, aft
    ("Combined Mooring Winch Hydraulic UnitA1", "Combined Mooring Winch Hydraulic Unit A1"),
    ("Combined Mooring Winch Hydraulic UnitAft1", "Combined Mooring Winch Hydraulic Unit A1"),
    // Emergency towing system, second forward
    ("Emergency Towing SystemF2", "Emergency Towing System F2"),
    ("Emergency Towing SystemForward2", "Emergency Towing System F2"),
    // Liferaft 20 person
    ("Liferaft 20 PersonP1", "Liferaft 20 Person P1"),
    ("Liferaft 20 PersonP2", "Liferaft 20 Person P2"),
    ("Liferaft 20 PersonPort1", "Liferaft 20 Person P1"),
    ("Liferaft 20 PersonPort2", "Liferaft 20 Person P2"),
    ("Liferaft 20 PersonS1", "Liferaft 20 Person S1"),
    ("Liferaft 20 PersonS2", "Liferaft 20 Person S2"),
    ("Liferaft 20 PersonStarboard1", "Liferaft 20 Person S1"),
    ("Liferaft 20 PersonStarboard2", "Liferaft 20 Person S2"),
    // Mooring winch hydraulic unit, forward
    ("Mooring Winch Hydraulic UnitF1", "Mooring Winch Hydraulic Unit F1"),
    ("Mooring Winch Hydraulic UnitForward1", "Mooring Winch Hydraulic Unit F1"),
    // Provision crane, redundant starboard wording
    ("Provision Crane StbdS1", "Provision Crane S1"),
    ("Provision Crane StbdStarboard1", "Provision Crane S1"),
];

/// Generic suffix table: a trailing directional word or dash-code is replaced
/// by its single-letter position code. Dash-coded suffixes are consulted
/// first so that a single pass lands on a fixed point of the whole pipeline.
pub(super) const SUFFIX_RULES: &[(&str, &str)] = &[
    ("-P", "P"),
    ("-S", "S"),
    ("-Port", "P"),
    ("-Stbd", "S"),
    ("-Starboard", "S"),
    ("Aft", "A"),
    ("Forward", "F"),
    ("Fwd", "F"),
    ("Port", "P"),
    ("Starboard", "S"),
];
