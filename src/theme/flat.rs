pub(super) const HTML: &str = r##"<!DOCTYPE html>
<html dir="{{ text_direction }}">
<head>
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta http-equiv="Content-Type" content="text/html; charset=UTF-8" />
  <title>{{ product.name }}</title>
  <style type="text/css">
    body { width: 100% !important; height: 100%; margin: 0; background-color: #2C3E50; color: #FFFFFF; font-family: Arial, 'Helvetica Neue', Helvetica, sans-serif; }
    a { color: #FFFFFF; }
    .wrapper { width: 100%; margin: 0; padding: 0; background-color: #2C3E50; }
    .masthead { padding: 25px 0; text-align: center; }
    .masthead_logo { max-width: 400px; border: 0; }
    .masthead_name { font-size: 16px; font-weight: bold; color: #FFFFFF; text-decoration: none; }
    .card { width: 570px; margin: 0 auto; padding: 35px; background-color: #34495E; }
    .dictionary { width: 100%; margin: 20px 0; }
    .dictionary_key { padding: 4px 10px 4px 0; font-weight: bold; white-space: nowrap; }
    .dictionary_value { padding: 4px 0; }
    .data-table { width: 100%; margin: 25px 0; border-collapse: collapse; }
    .data-table_header { padding: 8px 5px; background-color: #2C3E50; font-size: 12px; text-transform: uppercase; }
    .data-table_cell { padding: 10px 5px; border-bottom: 1px solid #2C3E50; font-size: 15px; }
    .action { width: 100%; margin: 30px auto; text-align: center; }
    .invite-code { display: inline-block; padding: 10px 20px; background-color: #2C3E50; font-size: 18px; letter-spacing: 2px; }
    .button { display: inline-block; font-size: 15px; line-height: 45px; text-align: center; text-decoration: none; -webkit-text-size-adjust: none; mso-hide: all; }
    .qr-code { max-width: 250px; }
    .footer { width: 570px; margin: 0 auto; padding: 25px 0; text-align: center; }
    h1 { margin-top: 0; font-size: 20px; font-weight: normal; }
    p { margin-top: 0; font-size: 16px; line-height: 1.5em; }
    p.sub { font-size: 12px; color: #BDC3C7; }
    @media only screen and (max-width: 600px) {
      .card, .footer { width: 100% !important; }
    }
  </style>
</head>
<body dir="{{ text_direction }}">
  <div class="wrapper">
    <div class="masthead">
      <a class="masthead_name" href="{{ product.link }}" target="_blank">
        {{#if product.logo}}
        <img src="{{ product.logo }}" class="masthead_logo" />
        {{else}}
        {{ product.name }}
        {{/if}}
      </a>
    </div>
    <div class="card">
      {{#if body.title}}
      <h1>{{ body.title }}</h1>
      {{/if}}
      {{#if body.salutation}}
      <h1>{{ body.salutation }},</h1>
      {{/if}}
      {{#each body.intros}}
      <p>{{ this }}</p>
      {{/each}}
      {{#if body.free_form}}
      <div class="free-form">
        {{{ body.free_form.html }}}
      </div>
      {{/if}}
      {{#if body.structured}}
      {{#if body.structured.dictionary}}
      <table class="dictionary" cellpadding="0" cellspacing="0">
        {{#each body.structured.dictionary.entries}}
        <tr>
          <td class="dictionary_key">{{ key }}</td>
          <td class="dictionary_value">{{ value }}</td>
        </tr>
        {{/each}}
      </table>
      {{/if}}
      {{#if body.structured.table}}
      <table class="data-table" width="100%" cellpadding="0" cellspacing="0">
        <tr>
          {{#each body.structured.table.columns}}
          <th class="data-table_header"{{#if width}} width="{{ width }}"{{/if}} align="{{ align }}">{{ label }}</th>
          {{/each}}
        </tr>
        {{#each body.structured.table.rows}}
        <tr>
          {{#each this}}
          <td class="data-table_cell"{{#if width}} width="{{ width }}"{{/if}} align="{{ align }}">{{ value }}</td>
          {{/each}}
        </tr>
        {{/each}}
      </table>
      {{/if}}
      {{#each body.structured.actions}}
      <div class="action">
        <p>{{ instructions }}</p>
        {{#if invite_code}}
        <span class="invite-code">{{ invite_code }}</span>
        {{/if}}
        {{#if button}}
        <a href="{{ button.link }}" class="button" style="background-color: {{ button.color }}; color: {{ button.text_color }}; width: {{ button.width }}px;" target="_blank">{{ button.text }}</a>
        <p class="sub">{{ button.trouble }}<br /><a href="{{ button.link }}">{{ button.link }}</a></p>
        {{/if}}
      </div>
      {{/each}}
      {{/if}}
      {{#if body.qr_code}}
      <p style="text-align: center"><img src="{{ body.qr_code }}" class="qr-code" alt="QR code" /></p>
      {{/if}}
      {{#each body.outros}}
      <p>{{ this }}</p>
      {{/each}}
      <p>{{ body.signature }},<br />{{ product.name }}</p>
    </div>
    <div class="footer">
      <p class="sub">{{ product.copyright }}</p>
    </div>
  </div>
</body>
</html>
"##;

pub(super) const PLAIN_TEXT: &str = "\
{{#if body.title}}{{ body.title }}
{{/if}}{{#if body.salutation}}{{ body.salutation }},
{{/if}}

{{#each body.intros}}{{ this }}
{{/each}}

{{#if body.free_form}}{{{ body.free_form.text }}}
{{/if}}

{{#if body.structured}}
{{#if body.structured.dictionary}}{{#each body.structured.dictionary.entries}}* {{ key }}: {{ value }}
{{/each}}
{{/if}}

{{#if body.structured.table}}{{{ body.structured.table.text }}}
{{/if}}

{{#each body.structured.actions}}{{ instructions }}
{{#if invite_code}}  {{ invite_code }}
{{/if}}{{#if button}}  {{ button.link }}
{{/if}}

{{/each}}
{{/if}}
{{#each body.outros}}{{ this }}
{{/each}}

{{ body.signature }},
{{ product.name }}{{#if product.link}} ({{ product.link }}){{/if}}
{{ product.copyright }}
";
