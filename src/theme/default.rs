pub(super) const HTML: &str = r##"<!DOCTYPE html>
<html dir="{{ text_direction }}">
<head>
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta http-equiv="Content-Type" content="text/html; charset=UTF-8" />
  <title>{{ product.name }}</title>
  <style type="text/css">
    body { width: 100% !important; height: 100%; margin: 0; line-height: 1.4; background-color: #F2F4F6; color: #74787E; -webkit-text-size-adjust: none; }
    a { color: #3869D4; }
    td { word-break: break-word; }
    .email-wrapper { width: 100%; margin: 0; padding: 0; background-color: #F2F4F6; }
    .email-content { width: 100%; margin: 0; padding: 0; }
    .email-masthead { padding: 25px 0; text-align: center; }
    .email-masthead_logo { max-width: 400px; border: 0; }
    .email-masthead_name { font-size: 16px; font-weight: bold; color: #2F3133; text-decoration: none; text-shadow: 0 1px 0 white; }
    .email-body { width: 100%; margin: 0; padding: 0; border-top: 1px solid #EDEFF2; border-bottom: 1px solid #EDEFF2; background-color: #FFF; }
    .email-body_inner { width: 570px; margin: 0 auto; padding: 0; }
    .email-footer { width: 570px; margin: 0 auto; padding: 0; text-align: center; }
    .body-action { width: 100%; margin: 30px auto; padding: 0; text-align: center; }
    .body-dictionary { width: 100%; overflow: hidden; margin: 20px auto 10px; padding: 0; }
    .body-dictionary_key { float: left; clear: both; min-width: 20%; padding: 0 10px 0 0; font-weight: bold; }
    .body-dictionary_value { float: left; margin: 0 0 10px 0; }
    .body-sub { margin-top: 25px; padding-top: 25px; border-top: 1px solid #EDEFF2; table-layout: fixed; }
    .content-cell { padding: 35px; }
    .data-wrapper { width: 100%; margin: 0; padding: 35px 0; }
    .data-table { width: 100%; margin: 0; }
    .data-table_header { padding: 0 0 8px 0; border-bottom: 1px solid #EDEFF2; font-size: 12px; color: #9BA2AB; }
    .data-table_cell { padding: 10px 5px; color: #74787E; font-size: 15px; line-height: 18px; }
    .invite-code { display: inline-block; padding: 10px 20px; border: 1px dashed #74787E; font-size: 18px; letter-spacing: 2px; }
    .qr-code { max-width: 250px; }
    .button { display: inline-block; border-radius: 3px; font-size: 15px; line-height: 45px; text-align: center; text-decoration: none; -webkit-text-size-adjust: none; mso-hide: all; }
    h1 { margin-top: 0; color: #2F3133; font-size: 19px; font-weight: bold; }
    p { margin-top: 0; color: #74787E; font-size: 16px; line-height: 1.5em; }
    p.sub { font-size: 12px; }
    p.center { text-align: center; }
    @media only screen and (max-width: 600px) {
      .email-body_inner, .email-footer { width: 100% !important; }
    }
    @media only screen and (max-width: 500px) {
      .button { width: 100% !important; }
    }
  </style>
</head>
<body dir="{{ text_direction }}">
  <table class="email-wrapper" width="100%" cellpadding="0" cellspacing="0">
    <tr>
      <td align="center">
        <table class="email-content" width="100%" cellpadding="0" cellspacing="0">
          <tr>
            <td class="email-masthead">
              <a class="email-masthead_name" href="{{ product.link }}" target="_blank">
                {{#if product.logo}}
                <img src="{{ product.logo }}" class="email-masthead_logo" />
                {{else}}
                {{ product.name }}
                {{/if}}
              </a>
            </td>
          </tr>
          <tr>
            <td class="email-body" width="100%">
              <table class="email-body_inner" align="center" width="570" cellpadding="0" cellspacing="0">
                <tr>
                  <td class="content-cell">
                    <h1>{{#if body.title}}{{ body.title }}{{/if}}{{#if body.salutation}}{{ body.salutation }},{{/if}}</h1>
                    {{#each body.intros}}
                    <p>{{ this }}</p>
                    {{/each}}
                    {{#if body.free_form}}
                    {{{ body.free_form.html }}}
                    {{/if}}
                    {{#if body.structured}}
                    {{#if body.structured.dictionary}}
                    <dl class="body-dictionary">
                      {{#each body.structured.dictionary.entries}}
                      <dt class="body-dictionary_key">{{ key }}:</dt>
                      <dd class="body-dictionary_value">{{ value }}</dd>
                      {{/each}}
                    </dl>
                    {{/if}}
                    {{#if body.structured.table}}
                    <table class="data-wrapper" width="100%" cellpadding="0" cellspacing="0">
                      <tr>
                        <td colspan="2">
                          <table class="data-table" width="100%" cellpadding="0" cellspacing="0">
                            <tr>
                              {{#each body.structured.table.columns}}
                              <th class="data-table_header"{{#if width}} width="{{ width }}"{{/if}} style="text-align: {{ align }}">{{ label }}</th>
                              {{/each}}
                            </tr>
                            {{#each body.structured.table.rows}}
                            <tr>
                              {{#each this}}
                              <td class="data-table_cell"{{#if width}} width="{{ width }}"{{/if}} style="text-align: {{ align }}">{{ value }}</td>
                              {{/each}}
                            </tr>
                            {{/each}}
                          </table>
                        </td>
                      </tr>
                    </table>
                    {{/if}}
                    {{#each body.structured.actions}}
                    <p>{{ instructions }}</p>
                    <table class="body-action" align="center" width="100%" cellpadding="0" cellspacing="0">
                      <tr>
                        <td align="center">
                          {{#if invite_code}}
                          <span class="invite-code">{{ invite_code }}</span>
                          {{/if}}
                          {{#if button}}
                          <a href="{{ button.link }}" class="button" style="background-color: {{ button.color }}; color: {{ button.text_color }}; width: {{ button.width }}px;" target="_blank">{{ button.text }}</a>
                          {{/if}}
                        </td>
                      </tr>
                    </table>
                    {{/each}}
                    {{/if}}
                    {{#if body.qr_code}}
                    <p class="center"><img src="{{ body.qr_code }}" class="qr-code" alt="QR code" /></p>
                    {{/if}}
                    {{#each body.outros}}
                    <p>{{ this }}</p>
                    {{/each}}
                    <p>
                      {{ body.signature }},
                      <br />
                      {{ product.name }}
                    </p>
                    {{#if body.structured}}
                    {{#each body.structured.actions}}
                    {{#if button}}
                    <table class="body-sub">
                      <tr>
                        <td>
                          <p class="sub">{{ button.trouble }}</p>
                          <p class="sub"><a href="{{ button.link }}">{{ button.link }}</a></p>
                        </td>
                      </tr>
                    </table>
                    {{/if}}
                    {{/each}}
                    {{/if}}
                  </td>
                </tr>
              </table>
            </td>
          </tr>
          <tr>
            <td>
              <table class="email-footer" align="center" width="570" cellpadding="0" cellspacing="0">
                <tr>
                  <td class="content-cell">
                    <p class="sub center">{{ product.copyright }}</p>
                  </td>
                </tr>
              </table>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>
"##;

// Block helpers open on a content line so the output is the same whether or
// not their standalone closing lines are stripped; blank-line runs are
// collapsed afterwards.
pub(super) const PLAIN_TEXT: &str = "\
{{#if body.title}}{{ body.title }}
{{/if}}{{#if body.salutation}}{{ body.salutation }},
{{/if}}

{{#each body.intros}}{{ this }}

{{/each}}
{{#if body.free_form}}{{{ body.free_form.text }}}

{{/if}}
{{#if body.structured}}
{{#if body.structured.dictionary}}{{#each body.structured.dictionary.entries}}{{ key }}: {{ value }}
{{/each}}

{{/if}}
{{#if body.structured.table}}{{{ body.structured.table.text }}}

{{/if}}
{{#each body.structured.actions}}{{ instructions }}
{{#if invite_code}}{{ invite_code }}
{{/if}}{{#if button}}{{ button.link }}
{{/if}}

{{/each}}
{{/if}}
{{#each body.outros}}{{ this }}

{{/each}}
{{ body.signature }},
{{ product.name }}{{#if product.link}} - {{ product.link }}{{/if}}

{{ product.copyright }}
";
