use crate::parsers::html;
use crate::results::UNKNOWN;

const PAGE: &str = r#"
<html><body><ul>
  <li>
    <div class="base-card job-search-card">
      <a class="base-card__full-link" href="https://fr.linkedin.com/jobs/view/cfd-engineer-1"></a>
      <div class="base-search-card__info">
        <h3 class="base-search-card__title">
          CFD Engineer
        </h3>
        <h4 class="base-search-card__subtitle"><a href="https://fr.linkedin.com/company/acme">Acme</a></h4>
        <div class="base-search-card__metadata">
          <span class="job-search-card__location">Toulouse, Occitanie, France</span>
          <time class="job-search-card__listdate" datetime="2024-01-05">1 week ago</time>
        </div>
        <p class="job-search-card__snippet">Use of OpenFOAM for aerodynamic simulation</p>
      </div>
    </div>
  </li>
  <li>
    <div class="base-card job-search-card">
      <h3 class="base-search-card__title">Ingénieur Calcul</h3>
      <h4 class="base-search-card__subtitle">   </h4>
      <time>2 days ago</time>
    </div>
  </li>
</ul></body></html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complete_card() {
        let records = html::parse(PAGE);
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.title, "CFD Engineer");
        assert_eq!(first.company, "Acme");
        assert_eq!(first.location, "Toulouse, Occitanie, France");
        assert_eq!(first.posted_date, "2024-01-05");
        assert_eq!(first.link, "https://fr.linkedin.com/jobs/view/cfd-engineer-1");
        assert_eq!(first.description, "Use of OpenFOAM for aerodynamic simulation");
    }

    #[test]
    fn test_missing_fields_become_sentinels() {
        let records = html::parse(PAGE);
        let second = &records[1];

        assert_eq!(second.title, "Ingénieur Calcul");
        assert_eq!(second.company, UNKNOWN);
        assert_eq!(second.location, UNKNOWN);
        // A time element without a datetime attribute
        assert_eq!(second.posted_date, UNKNOWN);
        assert_eq!(second.link, UNKNOWN);
        assert_eq!(second.description, "");
    }

    #[test]
    fn test_page_without_cards() {
        let records = html::parse("<html><body><p>No matching jobs found.</p></body></html>");
        assert!(records.is_empty());
    }
}
