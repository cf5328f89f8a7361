// ABOUTME: Compiled-in peptide catalog data
// ABOUTME: Educational reference entries; order here is the catalog order used for tie-breaking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use peptidion_core::models::{CatalogEntry, ExperienceLevel, PeptideCategory, UserGoal};

use ExperienceLevel::{Advanced, Beginner, Intermediate};

/// Built-in catalog, in display order
pub static BUILTIN_ENTRIES: [CatalogEntry; 12] = [
    CatalogEntry {
        id: "bpc-157",
        name: "BPC-157",
        category: PeptideCategory::Recovery,
        short_description: "Body protection compound studied for tendon, ligament and gut repair.",
        full_description: "BPC-157 is a 15 amino acid fragment of a protein found in gastric juice. \
            Animal studies report accelerated healing of tendons, ligaments, muscle and the \
            gastrointestinal lining. Human data remain limited.",
        benefits: &[
            "Supports soft tissue healing",
            "Studied for gut lining repair",
            "May reduce inflammation",
        ],
        risks: &[
            "Limited human clinical data",
            "Injection site irritation",
            "Not approved for human use",
        ],
        dosage_example: "250-500 mcg once or twice daily (research literature)",
        cycle_length: "4-6 weeks",
        experience_levels: &[Beginner, Intermediate, Advanced],
        goals: &[UserGoal::Recovery, UserGoal::MuscleGain],
    },
    CatalogEntry {
        id: "tb-500",
        name: "TB-500",
        category: PeptideCategory::Recovery,
        short_description: "Thymosin beta-4 fragment researched for flexibility and injury recovery.",
        full_description: "TB-500 is a synthetic version of a region of thymosin beta-4, a protein \
            involved in cell migration and blood vessel formation. It is commonly discussed \
            alongside BPC-157 for recovery protocols.",
        benefits: &[
            "Studied for muscle and tendon repair",
            "May improve flexibility",
            "Supports new blood vessel formation",
        ],
        risks: &["Headache and lethargy reported", "Long-term effects unknown"],
        dosage_example: "2-2.5 mg twice weekly during a loading phase (research literature)",
        cycle_length: "4-6 weeks",
        experience_levels: &[Intermediate, Advanced],
        goals: &[UserGoal::Recovery],
    },
    CatalogEntry {
        id: "ipamorelin",
        name: "Ipamorelin",
        category: PeptideCategory::Growth,
        short_description: "Selective growth hormone secretagogue with a mild side-effect profile.",
        full_description: "Ipamorelin stimulates growth hormone release from the pituitary without \
            a large rise in cortisol or prolactin. It is often paired with CJC-1295.",
        benefits: &[
            "Increases natural growth hormone pulses",
            "May improve sleep quality",
            "Supports lean mass",
        ],
        risks: &["Water retention", "Increased hunger", "Tingling in extremities"],
        dosage_example: "100-300 mcg before bed (research literature)",
        cycle_length: "8-12 weeks",
        experience_levels: &[Beginner, Intermediate],
        goals: &[UserGoal::MuscleGain, UserGoal::Recovery, UserGoal::FatLoss],
    },
    CatalogEntry {
        id: "cjc-1295",
        name: "CJC-1295",
        category: PeptideCategory::Growth,
        short_description: "GHRH analogue that extends growth hormone release.",
        full_description: "CJC-1295 is a growth hormone releasing hormone analogue. Versions with \
            a drug affinity complex have a long half-life; versions without it act for a shorter \
            window and are typically combined with a secretagogue.",
        benefits: &[
            "Raises growth hormone and IGF-1",
            "May support fat loss",
            "May improve recovery",
        ],
        risks: &["Flushing", "Injection site reactions", "Possible insulin resistance"],
        dosage_example: "100 mcg with ipamorelin before bed (research literature)",
        cycle_length: "8-12 weeks",
        experience_levels: &[Intermediate, Advanced],
        goals: &[UserGoal::MuscleGain, UserGoal::FatLoss],
    },
    CatalogEntry {
        id: "tesamorelin",
        name: "Tesamorelin",
        category: PeptideCategory::FatLoss,
        short_description: "GHRH analogue studied for reducing visceral fat.",
        full_description: "Tesamorelin is a growth hormone releasing factor analogue approved in \
            some jurisdictions for reducing abdominal fat in specific patient groups.",
        benefits: &["Targets visceral fat", "May improve lipid markers"],
        risks: &["Joint pain", "Fluid retention", "Blood sugar changes"],
        dosage_example: "1-2 mg daily (clinical literature)",
        cycle_length: "12 weeks",
        experience_levels: &[Advanced],
        goals: &[UserGoal::FatLoss],
    },
    CatalogEntry {
        id: "aod-9604",
        name: "AOD-9604",
        category: PeptideCategory::FatLoss,
        short_description: "Growth hormone fragment researched for fat metabolism.",
        full_description: "AOD-9604 is a modified fragment of the growth hormone molecule studied \
            for lipolysis without the growth-promoting effects of the full hormone.",
        benefits: &["Studied for fat breakdown", "No effect on blood sugar reported"],
        risks: &["Limited efficacy data", "Headache"],
        dosage_example: "250-300 mcg daily, fasted (research literature)",
        cycle_length: "8-12 weeks",
        experience_levels: &[Beginner, Intermediate],
        goals: &[UserGoal::FatLoss],
    },
    CatalogEntry {
        id: "mots-c",
        name: "MOTS-c",
        category: PeptideCategory::Longevity,
        short_description: "Mitochondrial peptide studied for metabolic health and endurance.",
        full_description: "MOTS-c is encoded in mitochondrial DNA and acts on metabolic \
            regulation. Animal work links it to insulin sensitivity and exercise capacity.",
        benefits: &[
            "Studied for insulin sensitivity",
            "May improve endurance",
            "Supports metabolic flexibility",
        ],
        risks: &["Very limited human data", "Injection site reactions"],
        dosage_example: "5-10 mg weekly split into doses (research literature)",
        cycle_length: "6-8 weeks",
        experience_levels: &[Intermediate, Advanced],
        goals: &[UserGoal::Longevity, UserGoal::Energy, UserGoal::FatLoss],
    },
    CatalogEntry {
        id: "epitalon",
        name: "Epitalon",
        category: PeptideCategory::Longevity,
        short_description: "Synthetic tetrapeptide researched for telomerase activity.",
        full_description: "Epitalon is a four amino acid peptide based on a pineal gland extract. \
            Research has focused on telomere length, sleep and circadian rhythm.",
        benefits: &["Studied for telomerase activation", "May support sleep quality"],
        risks: &["Research largely from a single group", "Long-term effects unknown"],
        dosage_example: "5-10 mg daily for a short course (research literature)",
        cycle_length: "10-20 days",
        experience_levels: &[Beginner, Intermediate, Advanced],
        goals: &[UserGoal::Longevity, UserGoal::Recovery],
    },
    CatalogEntry {
        id: "semax",
        name: "Semax",
        category: PeptideCategory::Cognitive,
        short_description: "Nasal nootropic peptide studied for focus and neuroprotection.",
        full_description: "Semax is a synthetic analogue of an ACTH fragment. It is studied for \
            attention, memory and recovery after neurological injury.",
        benefits: &["Studied for focus and memory", "May support neuroprotection"],
        risks: &["Nasal irritation", "Anxiety at higher doses"],
        dosage_example: "200-600 mcg intranasally per day (research literature)",
        cycle_length: "2-4 weeks",
        experience_levels: &[Beginner, Intermediate],
        goals: &[UserGoal::Cognitive, UserGoal::Energy],
    },
    CatalogEntry {
        id: "selank",
        name: "Selank",
        category: PeptideCategory::Cognitive,
        short_description: "Anxiolytic peptide studied for calm focus.",
        full_description: "Selank is a synthetic analogue of the immunomodulatory peptide \
            tuftsin. It is studied for anxiety reduction without sedation.",
        benefits: &["Studied for reduced anxiety", "May improve mental clarity"],
        risks: &["Fatigue", "Limited data outside a few countries"],
        dosage_example: "250-500 mcg intranasally per day (research literature)",
        cycle_length: "2-4 weeks",
        experience_levels: &[Beginner, Intermediate, Advanced],
        goals: &[UserGoal::Cognitive],
    },
    CatalogEntry {
        id: "ghk-cu",
        name: "GHK-Cu",
        category: PeptideCategory::Skin,
        short_description: "Copper peptide used for skin repair and collagen support.",
        full_description: "GHK-Cu is a naturally occurring copper complex that declines with \
            age. Topical and injectable forms are studied for collagen synthesis, wound healing \
            and hair density.",
        benefits: &[
            "Supports collagen production",
            "Studied for wound healing",
            "May improve hair density",
        ],
        risks: &["Skin irritation", "Copper sensitivity"],
        dosage_example: "1-2 mg daily or topical serum (research literature)",
        cycle_length: "4-8 weeks",
        experience_levels: &[Beginner, Intermediate, Advanced],
        goals: &[UserGoal::Skin, UserGoal::Longevity, UserGoal::Recovery],
    },
    CatalogEntry {
        id: "melanotan-2",
        name: "Melanotan II",
        category: PeptideCategory::Skin,
        short_description: "Melanocortin agonist researched for skin pigmentation.",
        full_description: "Melanotan II is a synthetic analogue of alpha-melanocyte stimulating \
            hormone. It increases pigmentation and has notable side effects.",
        benefits: &["Increases skin pigmentation"],
        risks: &[
            "Nausea and flushing",
            "Changes in moles",
            "Blood pressure effects",
        ],
        dosage_example: "250-500 mcg as a loading course (research literature)",
        cycle_length: "2-4 weeks",
        experience_levels: &[Advanced],
        goals: &[UserGoal::Skin],
    },
];
