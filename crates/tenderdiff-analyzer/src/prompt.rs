//! LLM prompt construction
//!
//! Prompts are plain string interpolation. Summaries and answers see only
//! the first N characters of a document; comparisons see both full texts.

use crate::config::TemplateSet;
use tenderdiff_domain::truncate_chars;

/// Builds the three prompt kinds for a template set
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder {
    templates: TemplateSet,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(templates: TemplateSet) -> Self {
        Self { templates }
    }

    /// Summarization prompt over the first `budget` characters of `text`
    pub fn summarize(&self, text: &str, budget: usize) -> String {
        let instructions = match self.templates {
            TemplateSet::Tender => TENDER_SUMMARY_INSTRUCTIONS,
            TemplateSet::Plain => PLAIN_SUMMARY_INSTRUCTIONS,
        };

        format!("{}\n\n{}", instructions, truncate_chars(text, budget))
    }

    /// Comparison prompt over both full, untruncated texts
    pub fn compare(&self, text1: &str, text2: &str) -> String {
        let instructions = match self.templates {
            TemplateSet::Tender => TENDER_COMPARISON_INSTRUCTIONS,
            TemplateSet::Plain => PLAIN_COMPARISON_INSTRUCTIONS,
        };

        format!(
            "{}\n\nDocument 1:\n{}\n\nDocument 2:\n{}\n\nComparison:\n",
            instructions, text1, text2
        )
    }

    /// Question-answering prompt over the first `budget` characters of `text`
    pub fn answer(&self, text: &str, question: &str, budget: usize) -> String {
        format!(
            "Based on the following document, answer the question:\n\nDocument:\n{}\n\nQuestion: {}",
            truncate_chars(text, budget),
            question.trim()
        )
    }
}

const PLAIN_SUMMARY_INSTRUCTIONS: &str = "Summarize the following document:";

const PLAIN_COMPARISON_INSTRUCTIONS: &str = "Compare the following two documents. \
Point out the key similarities and differences, and mention anything that \
appears in only one of them.";

const TENDER_SUMMARY_INSTRUCTIONS: &str = r#"Extract and organize all information from this tender PDF document under the following categories:
1. BID PREPARATION AND ELIGIBILITY

Section 7 - Bidder's Eligibility: Technical qualifications, financial criteria, experience requirements, certifications for both Project A & B
Section 23 - Bidding Process: Timeline, deadlines, evaluation methodology, award criteria
Section 22 - Bidding Document: Required forms, formats, amendment procedures
Section 24 - E-Tendering: Registration process, platform details, submission requirements
Section 6 - Facilities Management Services: Warranty deliverables, AMC scope, SLAs, performance metrics

2. SCOPE OF WORK
Project A (Network) - Section 5.1:

5.1.1 Bidder's Scope: Hardware/software, installation, configuration, testing, documentation
5.1.2 OEM's Scope: Manufacturer responsibilities, support, warranty
5.1.4 RACI Matrix: Complete responsibility assignments

Project B (Security) - Section 5.2:

5.2.1 Bidder's Scope: Implementation methodology, integration requirements
5.2.2 OEM's Scope: Vendor responsibilities, licensing
5.2.4 Solution-wise Scope: Extract specifications for NGFW, WAF, DDOS, LB, GSLB, SSL and other security solutions
5.2.5 RACI Matrix: Security project responsibility assignments

3. PROJECT & IMPLEMENTATION RESPONSIBILITIES
Extract: Project management structure, implementation phases, milestones, resource allocation, communication protocols, quality assurance processes
4. FINANCIAL AND LEGAL COMPLIANCE
Extract: Payment terms, price structure, tax requirements, performance bonds, insurance, penalty clauses, legal compliance, dispute resolution, contract terms
5. SUBMISSION FORMS & ANNEXURES
List: All required forms, annexures, declarations, technical compliance sheets, commercial bid formats, certificates
OUTPUT REQUIREMENTS:

Use clear headings matching the sections above
Include specific details: dates, amounts, technical specifications
Note missing information sections
Highlight critical eligibility requirements and deadlines
Provide page references where possible
Flag ambiguous requirements needing clarification
Extract exact text for critical requirements
Distinguish mandatory vs. optional requirements
Include all contact information for queries

Provide comprehensive extraction covering all available information in these categories from the PDF document.:"#;

const TENDER_COMPARISON_INSTRUCTIONS: &str = r#"You are a legal tender expert. Analyze and compare the two documents in detail based on the following four core categories. For each category, extract full-length content from both documents and provide a **comprehensive, line-by-line distinction** between them.

Ensure that no minor detail is missed. Use a tabular format as shown below and highlight every difference clearly.

---

### Categories to Compare:

1. **Pre Qualification Criteria / Bidder Criteria / Eligibility Criteria**
   - Include: Minimum experience, financial thresholds, certifications, team composition, prior work experience, registration requirements, disqualifying conditions, etc.

2. **Scope of Work**
   - Include: Deliverables, tasks expected from bidder, hardware/software included, service levels, responsibilities, project timelines, maintenance obligations, integration expectations, etc.

3. **Technical Qualifications**
   - Include: Required certifications, past projects, technical capabilities, domain expertise, staffing requirements, infrastructure needs, system compatibility, etc.

4. **Technical Marking**
   - Include: Weightage distribution, scoring criteria, evaluation parameters, minimum qualifying scores, tie-breaking rules, documentation required for proof, etc.

---

### Output Format:

For each category, generate a table like:

#### [Category Name]
| Sub-topic | Document 1 Details | Document 2 Details | Key Differences |
|----------|--------------------|--------------------|------------------|
| [Sub-topic 1] | [Doc1 Info] | [Doc2 Info] | [Difference Summary] |
| [Sub-topic 2] | [Doc1 Info] | [Doc2 Info] | [Difference Summary] |

Repeat for all sub-topics within each category. Ensure **every point mentioned in the original documents is compared**.

If any section is missing or incomplete in either document, clearly state so.

Now analyze and compare the documents:"#;
